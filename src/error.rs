// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems while turning a dataset into statistics.
/// Any of these aborts the run; no partial tables are produced.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("unknown currency code `{0}`")]
    UnknownCurrency(String),

    #[error("malformed salary value `{0}`")]
    MalformedSalary(String),

    #[error("malformed publication date `{0}`")]
    MalformedDate(String),

    #[error("dataset header has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Catch-all for the I/O-facing layers (exports, report, front-ends).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

impl StatsError {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        StatsError::Io { source, path: path.into() }
    }
}
