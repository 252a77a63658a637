//! Error types for dx-trace.

use thiserror::Error;

/// Errors that can occur when writing dispatch traces.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, TraceError>`.
pub type TraceResult<T> = Result<T, TraceError>;
