//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one
//! variant where they need it.

use thiserror::Error;

/// The base error type for `cn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cn-core`.
pub type NavResult<T> = Result<T, NavError>;
