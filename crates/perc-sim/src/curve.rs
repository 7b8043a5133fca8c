//! Estimated percolation-probability curve.

/// One sampled vacancy probability and its percolation estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Vacancy probability `v` used to generate the grids.
    pub vacancy:     f64,
    /// `successes / trials`, in `[0, 1]`.
    pub percolation: f64,
    pub successes:   u64,
    pub trials:      u64,
}

impl CurvePoint {
    /// Build a point from raw counts.  `trials` must be non-zero.
    pub fn new(vacancy: f64, successes: u64, trials: u64) -> Self {
        debug_assert!(trials > 0 && successes <= trials);
        Self {
            vacancy,
            percolation: successes as f64 / trials as f64,
            successes,
            trials,
        }
    }
}

/// Ordered `(vacancy, percolation)` estimates, ascending in `vacancy`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercolationCurve {
    pub points: Vec<CurvePoint>,
}

impl PercolationCurve {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(vacancy, percolation)` pairs in sweep order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.vacancy, p.percolation))
    }

    pub fn vacancies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.vacancy).collect()
    }

    pub fn percolations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.percolation).collect()
    }
}
