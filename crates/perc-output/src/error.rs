//! Error types for perc-output.

use perc_core::PercError;
use thiserror::Error;

/// Errors that can occur when reading grids or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("grid file parse error: {0}")]
    Parse(String),

    #[error("invalid grid: {0}")]
    Grid(#[from] PercError),

    #[error("render error: {0}")]
    Render(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
