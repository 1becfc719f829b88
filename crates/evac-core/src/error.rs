//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `EvacError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `evac-core` itself.
#[derive(Debug, Error)]
pub enum EvacError {
    /// A modeling parameter is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `evac-*` crates.
pub type EvacResult<T> = Result<T, EvacError>;
