//! Random site-vacancy grid generation.

use rand::Rng;

use crate::{Grid, PercError, PercResult};

/// Build a random `side × side` site-vacancy grid.
///
/// Each cell independently draws `u ~ Uniform[0, 1)` and is vacant iff
/// `u < vacancy`, so `vacancy == 0.0` blocks every site and `vacancy == 1.0`
/// opens every site.  Randomness comes only from `rng`; a seeded generator
/// reproduces the grid exactly.
///
/// Cells are drawn in row-major order.
pub fn make_matrix<R: Rng + ?Sized>(side: usize, vacancy: f64, rng: &mut R) -> PercResult<Grid> {
    // `contains` is false for NaN as well.
    if !(0.0..=1.0).contains(&vacancy) {
        return Err(PercError::InvalidProbability(vacancy));
    }
    let mut grid = Grid::new(side)?;
    for cell in grid.cells_mut() {
        *cell = rng.r#gen::<f64>() < vacancy;
    }
    Ok(grid)
}
