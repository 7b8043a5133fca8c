//! Sweep observer trait for progress reporting and data collection.

use perc_core::SweepConfig;

use crate::{CurvePoint, PercolationCurve};

/// Callbacks invoked by [`Sweep::run`][crate::Sweep::run] at key points in
/// the sweep loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SweepObserver for ProgressPrinter {
///     fn on_point_end(&mut self, index: usize, point: &CurvePoint) {
///         println!("#{index}: v={:.3} -> {:.3}", point.vacancy, point.percolation);
///     }
/// }
/// ```
pub trait SweepObserver {
    /// Called once before the first trial.
    fn on_sweep_start(&mut self, _config: &SweepConfig) {}

    /// Called after every trial with its outcome.
    fn on_trial_end(&mut self, _point: usize, _trial: u64, _percolated: bool) {}

    /// Called when all trials of sweep point `index` are done.
    fn on_point_end(&mut self, _index: usize, _point: &CurvePoint) {}

    /// Called once after the last sweep point.
    fn on_sweep_end(&mut self, _curve: &PercolationCurve) {}
}

/// A [`SweepObserver`] that does nothing.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
