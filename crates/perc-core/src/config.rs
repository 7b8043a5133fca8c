//! Monte Carlo sweep configuration.

/// Number of evenly spaced vacancy probabilities in a default sweep.
pub const DEFAULT_POINTS: usize = 25;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Top-level sweep configuration.
///
/// Typically built by `perc_sim::SweepBuilder` or loaded from a JSON file by
/// the application crate (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Lattice side length `n`.  Must be at least 1.
    pub side: usize,

    /// Independent trials per vacancy probability.  Must be at least 1.
    pub trials: u64,

    /// Number of sweep points spread evenly over `[0, 1]`, both endpoints
    /// included.  Must be at least 2.  Default: 25.
    #[cfg_attr(feature = "serde", serde(default = "default_points"))]
    pub points: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: u64,
}

#[cfg(feature = "serde")]
fn default_points() -> usize {
    DEFAULT_POINTS
}

#[cfg(feature = "serde")]
fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SweepConfig {
    /// Config with default point count and seed.
    pub fn new(side: usize, trials: u64) -> Self {
        Self { side, trials, points: DEFAULT_POINTS, seed: DEFAULT_SEED }
    }

    /// Vacancy probability of sweep point `k`: `k / (points - 1)`, or `None`
    /// if `k >= points`.
    ///
    /// The last point is exactly `1.0`.
    pub fn vacancy(&self, k: usize) -> Option<f64> {
        if k >= self.points {
            return None;
        }
        if k == self.points - 1 {
            return Some(1.0);
        }
        Some(k as f64 / (self.points - 1) as f64)
    }

    /// All sweep vacancy probabilities in ascending order.
    pub fn vacancies(&self) -> Vec<f64> {
        (0..self.points).filter_map(|k| self.vacancy(k)).collect()
    }
}
