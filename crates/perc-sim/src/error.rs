use perc_core::PercError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    #[error("sweep configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] PercError),
}

pub type SweepResult<T> = Result<T, SweepError>;
