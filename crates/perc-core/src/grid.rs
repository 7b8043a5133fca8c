//! Square binary lattice shared by site-vacancy and flow grids.

use std::fmt;
use std::ops::Index;

use crate::{PercError, PercResult};

/// An `n × n` lattice of binary cells, stored row-major.
///
/// The same type carries both roles in the model:
///
/// - **Site-vacancy grid**: `true` = vacant, `false` = blocked.
/// - **Flow grid**: `true` = full (reached from the top row), `false` = empty.
///
/// A `Grid` is square and non-empty by construction, so every consumer can
/// rely on `side() >= 1` and `cells().len() == side() * side()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side:  usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-`false` grid (all blocked, or all empty for a flow grid).
    pub fn new(side: usize) -> PercResult<Self> {
        Self::filled(side, false)
    }

    /// A grid with every cell set to `value`.
    pub fn filled(side: usize, value: bool) -> PercResult<Self> {
        if side == 0 {
            return Err(PercError::InvalidDimension { side, cells: 0 });
        }
        Ok(Self { side, cells: vec![value; side * side] })
    }

    /// Build from flattened row-major `0`/`1` values.
    ///
    /// Fails with [`PercError::InvalidDimension`] if `side == 0` or
    /// `values.len() != side * side`, and with [`PercError::InvalidCell`] for
    /// any value other than `0` or `1`.
    pub fn from_values(side: usize, values: &[u8]) -> PercResult<Self> {
        if side == 0 || side.checked_mul(side) != Some(values.len()) {
            return Err(PercError::InvalidDimension { side, cells: values.len() });
        }
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(PercError::InvalidCell { index, value }),
            })
            .collect::<PercResult<Vec<bool>>>()?;
        Ok(Self { side, cells })
    }

    /// Build from nested rows.  Every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> PercResult<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(PercError::InvalidDimension { side: 0, cells: 0 });
        }
        let mut values = Vec::with_capacity(side * side);
        for row in rows {
            let row = row.as_ref();
            if row.len() != side {
                return Err(PercError::ShapeMismatch {
                    expected: side,
                    got:      row.len(),
                    what:     "row length",
                });
            }
            values.extend_from_slice(row);
        }
        Self::from_values(side, &values)
    }

    /// Zeroed grid with a known-valid side.  Callers guarantee `side >= 1`.
    pub(crate) fn blank(side: usize) -> Self {
        debug_assert!(side > 0);
        Self { side, cells: vec![false; side * side] }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Side length `n`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count, `n * n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// If `row` or `col` is `>= side()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.side, "column {col} out of bounds for side {}", self.side);
        self.cells[row * self.side + col]
    }

    /// Set the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// If `row` or `col` is `>= side()`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.side, "column {col} out of bounds for side {}", self.side);
        self.cells[row * self.side + col] = value;
    }

    /// Row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.side;
        &self.cells[start..start + self.side]
    }

    /// The bottom row (`side() - 1`).
    #[inline]
    pub fn last_row(&self) -> &[bool] {
        self.row(self.side - 1)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.side)
    }

    /// Flattened row-major `0`/`1` values.
    pub fn to_values(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Number of `true` cells (vacant sites, or full sites for a flow grid).
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of `true` cells in `[0, 1]`.
    pub fn vacancy_fraction(&self) -> f64 {
        self.count_set() as f64 / self.cells.len() as f64
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// `Ok(())` iff `other` has the same side as `self`.
    ///
    /// `what` names `other` in the error message, e.g. `"flow grid side"`.
    pub fn ensure_same_shape(&self, other: &Grid, what: &'static str) -> PercResult<()> {
        if self.side != other.side {
            return Err(PercError::ShapeMismatch {
                expected: self.side,
                got:      other.side,
                what,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &bool {
        assert!(col < self.side, "column {col} out of bounds for side {}", self.side);
        &self.cells[row * self.side + col]
    }
}

/// One row per line, cells as `0`/`1` separated by single spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
