//! The `SweepWriter` trait implemented by curve writers.

use perc_sim::{CurvePoint, PercolationCurve};

use crate::OutputResult;

/// Sink for estimated curve points.
///
/// Errors surfaced while a sweep is running are stored by
/// [`SweepOutputObserver`][crate::SweepOutputObserver] and retrieved with
/// its `take_error`.
pub trait SweepWriter {
    /// Write one sweep point.
    fn write_point(&mut self, point: &CurvePoint) -> OutputResult<()>;

    /// Write every point of a finished curve.
    fn write_curve(&mut self, curve: &PercolationCurve) -> OutputResult<()> {
        for point in &curve.points {
            self.write_point(point)?;
        }
        Ok(())
    }

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
