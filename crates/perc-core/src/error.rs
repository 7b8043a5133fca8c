//! Lattice error type.
//!
//! Every variant is an input error detected eagerly at the boundary of the
//! offending operation.  None of them is transient; callers should not retry.

use thiserror::Error;

/// The top-level error type for `perc-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PercError {
    #[error("invalid grid dimension: side {side} with {cells} cells")]
    InvalidDimension { side: usize, cells: usize },

    #[error("vacancy probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("{what} {got} does not match grid side {expected}")]
    ShapeMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("cell {index} has value {value}; expected 0 or 1")]
    InvalidCell { index: usize, value: u8 },

    #[error("trial count must be at least 1")]
    InvalidTrials,

    #[error("flow grid marks blocked site ({row}, {col}) as full")]
    FullBlockedSite { row: usize, col: usize },
}

/// Shorthand result type for all `perc-*` crates.
pub type PercResult<T> = Result<T, PercError>;
