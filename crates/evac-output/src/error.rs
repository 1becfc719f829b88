//! Error types for evac-output.

use thiserror::Error;

/// Errors that can occur when writing evacuation results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown output format {0:?} (expected csv, sqlite, or parquet)")]
    UnknownFormat(String),

    #[error("output format {0} is not compiled in; rebuild with `--features {0}`")]
    FormatDisabled(&'static str),

    #[error("state row has {got} {what} values, layout has {expected}")]
    RowShape { what: &'static str, got: usize, expected: usize },

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
