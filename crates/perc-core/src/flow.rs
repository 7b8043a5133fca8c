//! Directed flow engine.
//!
//! Fluid enters every vacant site of row 0 and spreads to vacant neighbours
//! **down**, **right** and **left**.  It never moves up, which is what makes
//! the percolation directed.
//!
//! # Traversal
//!
//! Depth-first search over an explicit coordinate stack instead of call-stack
//! recursion, so grid size is bounded by memory rather than thread stack
//! depth.  A site is marked full the first time it is popped; later pops of
//! the same site are no-ops.  Every site is therefore expanded at most once
//! and the stack never holds more than `3 · n² + n` entries.
//!
//! The final flow grid is independent of exploration order: it is exactly
//! the set of vacant sites reachable from the top row by directed steps.

use crate::{Grid, PercResult};

type Site = (usize, usize);

/// Reusable flow engine.
///
/// Owns the traversal stack so repeated calls (one per Monte Carlo trial)
/// allocate it once.
#[derive(Debug, Default)]
pub struct FlowEngine {
    stack: Vec<Site>,
}

impl FlowEngine {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Compute the flow grid for `sites` into a freshly allocated grid.
    pub fn flow(&mut self, sites: &Grid) -> Grid {
        let mut full = Grid::blank(sites.side());
        self.fill(sites, &mut full);
        full
    }

    /// Compute the flow grid for `sites` into `full`, overwriting its
    /// previous contents.
    ///
    /// Fails with [`crate::PercError::ShapeMismatch`] if the two sides differ.
    pub fn flow_into(&mut self, sites: &Grid, full: &mut Grid) -> PercResult<()> {
        sites.ensure_same_shape(full, "flow grid side")?;
        full.cells_mut().fill(false);
        self.fill(sites, full);
        Ok(())
    }

    fn fill(&mut self, sites: &Grid, full: &mut Grid) {
        let n = sites.side();
        self.stack.clear();

        // Seed every top-row column; reversed so column 0 is expanded first.
        self.stack.extend((0..n).rev().map(|col| (0, col)));

        while let Some((row, col)) = self.stack.pop() {
            if !sites.get(row, col) || full.get(row, col) {
                continue;
            }
            full.set(row, col, true);

            // Pushed in reverse of exploration order: down, right, left.
            if col > 0 {
                self.stack.push((row, col - 1));
            }
            if col + 1 < n {
                self.stack.push((row, col + 1));
            }
            if row + 1 < n {
                self.stack.push((row + 1, col));
            }
        }
    }
}

/// One-shot convenience wrapper around [`FlowEngine::flow`].
pub fn dir_flow(sites: &Grid) -> Grid {
    FlowEngine::new().flow(sites)
}
