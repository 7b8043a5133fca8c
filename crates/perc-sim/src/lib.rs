//! `perc-sim` — Monte Carlo estimator of the directed percolation curve.
//!
//! # Sweep loop
//!
//! ```text
//! for k in 0..config.points:                v = k / (points - 1)
//!   for t in 0..config.trials:
//!     ① Generate — make_matrix(side, v) with TrialRng(seed, k, t)
//!     ② Flow     — FlowEngine::flow_into (stack reused across trials)
//!     ③ Check    — percolates(flow) → success count
//!   record successes / trials at v
//! ```
//!
//! Trials run sequentially on the calling thread.  Each trial draws from its
//! own seeded RNG, so a sweep is reproducible from its [`SweepConfig`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use perc_sim::{NoopObserver, SweepBuilder};
//!
//! let mut sweep = SweepBuilder::new(10, 500).seed(7).build()?;
//! let curve = sweep.run(&mut NoopObserver)?;
//! for p in &curve.points {
//!     println!("{:.3} {:.3}", p.vacancy, p.percolation);
//! }
//! ```
//!
//! [`SweepConfig`]: perc_core::SweepConfig

pub mod builder;
pub mod curve;
pub mod error;
pub mod observer;
pub mod sweep;


pub use builder::SweepBuilder;
pub use curve::{CurvePoint, PercolationCurve};
pub use error::{SweepError, SweepResult};
pub use observer::{NoopObserver, SweepObserver};
pub use sweep::{Sweep, estimate, make_graph};
