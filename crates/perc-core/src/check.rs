//! Percolation check.

use crate::Grid;

/// `true` iff any site in the bottom row of `flow` is full.
///
/// For a 1×1 grid the top row is the bottom row, so a vacant single site
/// percolates.
#[inline]
pub fn percolates(flow: &Grid) -> bool {
    flow.last_row().iter().any(|&full| full)
}
