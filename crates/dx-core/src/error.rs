//! Framework error type.
//!
//! Dispatch paths surface exactly one failure kind — `UnknownUnit` — because
//! an exhausted chain is reported as the ordinary `Unhandled` outcome value,
//! not as an error.  `Config` covers builder-time validation; nothing in the
//! framework retries or escalates, the immediate caller decides.

use thiserror::Error;

use crate::UnitId;

/// The top-level error type for all `dx-*` crates.
#[derive(Debug, Error)]
pub enum DxError {
    /// An operation referenced a unit the registry never registered.
    #[error("unit {0} is not registered")]
    UnknownUnit(UnitId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `dx-*` crates.
pub type DxResult<T> = Result<T, DxError>;
