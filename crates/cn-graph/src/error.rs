//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `cn-graph`.
///
/// Only document-level failures surface here.  Malformed individual records
/// in a seed document are skipped and counted in
/// [`SeedReport`](crate::SeedReport) instead.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
