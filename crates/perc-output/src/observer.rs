//! `SweepOutputObserver<W>` — bridges `SweepObserver` to a `SweepWriter`.

use perc_sim::{CurvePoint, PercolationCurve, SweepObserver};

use crate::writer::SweepWriter;
use crate::{OutputError, OutputResult};

/// A [`SweepObserver`] that streams each finished sweep point to any
/// [`SweepWriter`] and finishes the writer when the sweep ends.
///
/// Errors from the writer are stored internally because `SweepObserver`
/// methods have no return value.  After `sweep.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SweepOutputObserver<W: SweepWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: SweepWriter> SweepOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sweep.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SweepWriter> SweepObserver for SweepOutputObserver<W> {
    fn on_point_end(&mut self, _index: usize, point: &CurvePoint) {
        let result = self.writer.write_point(point);
        self.store_err(result);
    }

    fn on_sweep_end(&mut self, _curve: &PercolationCurve) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
