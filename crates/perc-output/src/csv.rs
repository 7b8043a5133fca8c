//! CSV curve backend.
//!
//! One row per sweep point:
//!
//! ```csv
//! vacancy_probability,percolation_probability,successes,trials
//! 0,0,0,500
//! 0.041666666666666664,0,0,500
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;
use perc_sim::CurvePoint;

use crate::OutputResult;
use crate::writer::SweepWriter;

/// Column names, in write order.
pub const HEADER: [&str; 4] = [
    "vacancy_probability",
    "percolation_probability",
    "successes",
    "trials",
];

/// Writes a percolation curve to a CSV file.
pub struct CsvSweepWriter {
    points:   Writer<File>,
    finished: bool,
}

impl CsvSweepWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut points = Writer::from_path(path)?;
        points.write_record(HEADER)?;
        Ok(Self { points, finished: false })
    }
}

impl SweepWriter for CsvSweepWriter {
    fn write_point(&mut self, point: &CurvePoint) -> OutputResult<()> {
        self.points.write_record(&[
            point.vacancy.to_string(),
            point.percolation.to_string(),
            point.successes.to_string(),
            point.trials.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.points.flush()?;
        Ok(())
    }
}
