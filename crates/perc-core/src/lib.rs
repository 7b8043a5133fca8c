//! `perc-core` — lattice primitives for the `dirperc` directed percolation
//! toolkit.
//!
//! This crate is a dependency of every other `perc-*` crate.  It has no
//! `perc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`grid`]        | `Grid` — square site-vacancy / flow lattice           |
//! | [`overlay`]     | `Overlay`, `SiteState` — sites + flow for rendering   |
//! | [`generate`]    | `make_matrix` — random site-vacancy grid              |
//! | [`flow`]        | `FlowEngine`, `dir_flow` — directed reachability      |
//! | [`check`]       | `percolates`                                          |
//! | [`rng`]         | `TrialRng` (per-trial), `SweepRng` (root)             |
//! | [`config`]      | `SweepConfig`                                         |
//! | [`error`]       | `PercError`, `PercResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SweepConfig`.           |

pub mod check;
pub mod config;
pub mod error;
pub mod flow;
pub mod generate;
pub mod grid;
pub mod overlay;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use check::percolates;
pub use config::SweepConfig;
pub use error::{PercError, PercResult};
pub use flow::{FlowEngine, dir_flow};
pub use generate::make_matrix;
pub use grid::Grid;
pub use overlay::{Overlay, SiteState};
pub use rng::{SweepRng, TrialRng};
