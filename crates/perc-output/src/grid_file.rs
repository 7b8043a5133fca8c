//! Site-vacancy grid text format.
//!
//! # Format
//!
//! ```text
//! 3
//! 1 0 1
//! 1 1 0
//! 0 1 1
//! ```
//!
//! The first line holds the side length `n`.  It is followed by `n * n`
//! whitespace-separated `0`/`1` values, the grid flattened row-major.  The
//! reader ignores line structure after the first line; the writer emits one
//! row per line, each value followed by a single space.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use perc_core::Grid;
use tracing::debug;

use crate::{OutputError, OutputResult};

/// Parse a grid from any `Read` source.
///
/// Fails with [`OutputError::Parse`] for a missing or non-numeric header or a
/// non-numeric cell token, and with [`OutputError::Grid`] if the value count
/// is not `n * n` or a value is not `0`/`1`.
pub fn read_grid<R: Read>(mut reader: R) -> OutputResult<Grid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let (header, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    let header = header.trim();
    let side: usize = header
        .parse()
        .map_err(|_| OutputError::Parse(format!("bad side length {header:?}")))?;

    let values = body
        .split_whitespace()
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<u8>()
                .map_err(|_| OutputError::Parse(format!("value {i}: bad token {tok:?}")))
        })
        .collect::<OutputResult<Vec<u8>>>()?;

    Ok(Grid::from_values(side, &values)?)
}

/// Write `grid` in the text format.
pub fn write_grid<W: Write>(mut writer: W, grid: &Grid) -> OutputResult<()> {
    writeln!(writer, "{}", grid.side())?;
    for row in grid.rows() {
        for &cell in row {
            write!(writer, "{} ", cell as u8)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a grid file from `path`.
pub fn read_grid_path(path: &Path) -> OutputResult<Grid> {
    let grid = read_grid(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), side = grid.side(), "read grid file");
    Ok(grid)
}

/// Create (or truncate) `path` and write `grid` to it.
pub fn write_grid_path(path: &Path, grid: &Grid) -> OutputResult<()> {
    write_grid(BufWriter::new(File::create(path)?), grid)?;
    debug!(path = %path.display(), side = grid.side(), "wrote grid file");
    Ok(())
}
