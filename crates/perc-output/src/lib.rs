//! `perc-output` — file formats and rendering for the dirperc toolkit.
//!
//! | Module        | Output                                                    |
//! |---------------|-----------------------------------------------------------|
//! | [`grid_file`] | Site-vacancy grid text files (read and write)             |
//! | [`csv`]       | Percolation curve as CSV                                  |
//! | [`plot`]      | SVG images of a grid overlay and of the curve             |
//!
//! Curve writers implement [`SweepWriter`] and can be driven live by
//! [`SweepOutputObserver`], which implements `perc_sim::SweepObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use perc_output::{CsvSweepWriter, SweepOutputObserver};
//!
//! let writer = CsvSweepWriter::new(Path::new("curve.csv"))?;
//! let mut obs = SweepOutputObserver::new(writer);
//! let curve = sweep.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod grid_file;
pub mod observer;
pub mod plot;
pub mod writer;


pub use csv::CsvSweepWriter;
pub use error::{OutputError, OutputResult};
pub use grid_file::{read_grid, read_grid_path, write_grid, write_grid_path};
pub use observer::SweepOutputObserver;
pub use plot::{curve_svg, overlay_svg, write_curve_svg, write_overlay_svg};
pub use writer::SweepWriter;
