//! Routing error type.

use thiserror::Error;

use cn_core::LocationId;

/// Errors produced by `cn-route`.
///
/// `LocationNotFound` and `Unreachable` are the two "no route" outcomes and
/// are deliberately distinct so callers can tell a typo from a disconnected
/// campus.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("location {0:?} not found in graph")]
    LocationNotFound(String),

    #[error("no route from {from:?} to {to:?}")]
    Unreachable { from: String, to: String },

    #[error("adjacency references {0}, which is not in the graph")]
    InconsistentGraph(LocationId),

    #[error("unknown emergency category {0:?}")]
    UnknownCategory(String),

    #[error("no reachable {category} destination from {from:?}")]
    NoEmergencyDestination { from: String, category: &'static str },
}

impl RouteError {
    /// `true` for the two outcomes that simply mean "no route".
    pub fn is_no_route(&self) -> bool {
        matches!(self, RouteError::LocationNotFound(_) | RouteError::Unreachable { .. })
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
