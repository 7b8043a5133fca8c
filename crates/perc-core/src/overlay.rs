//! Three-valued overlay of a site grid and its flow grid.

use crate::{Grid, PercError, PercResult};

/// Per-cell state of the overlay: `sites + flow` with `0/1/2` encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SiteState {
    Blocked = 0,
    Vacant  = 1,
    Full    = 2,
}

impl SiteState {
    /// Numeric overlay value (`0`, `1` or `2`).
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// A site grid combined with its flow grid, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    side:  usize,
    cells: Vec<SiteState>,
}

impl Overlay {
    /// Combine `sites` and `flow`.
    ///
    /// Fails with [`PercError::ShapeMismatch`] if the sides differ, and with
    /// [`PercError::FullBlockedSite`] if `flow` marks a blocked site as full.
    pub fn new(sites: &Grid, flow: &Grid) -> PercResult<Self> {
        sites.ensure_same_shape(flow, "flow grid side")?;
        let side = sites.side();
        let cells = sites
            .cells()
            .iter()
            .zip(flow.cells())
            .enumerate()
            .map(|(idx, (&vacant, &full))| match (vacant, full) {
                (false, false) => Ok(SiteState::Blocked),
                (true, false)  => Ok(SiteState::Vacant),
                (true, true)   => Ok(SiteState::Full),
                (false, true)  => Err(PercError::FullBlockedSite {
                    row: idx / side,
                    col: idx % side,
                }),
            })
            .collect::<PercResult<Vec<_>>>()?;
        Ok(Self { side, cells })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// State at (`row`, `col`).  Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> SiteState {
        assert!(col < self.side, "column {col} out of bounds for side {}", self.side);
        self.cells[row * self.side + col]
    }

    #[inline]
    pub fn cells(&self) -> &[SiteState] {
        &self.cells
    }

    /// Flattened row-major overlay values.
    pub fn to_values(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.value()).collect()
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: SiteState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}
