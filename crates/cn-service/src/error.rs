use thiserror::Error;

use cn_core::NavError;
use cn_graph::GraphError;
use cn_route::RouteError;
use cn_traffic::TrafficError;

/// Request-shape and construction errors.
///
/// "No route" outcomes are not errors at this layer; they are reported inside
/// the response (`found: false`).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Config(#[from] NavError),

    #[error("seed error: {0}")]
    Seed(#[from] GraphError),

    #[error("alternative route count must be at least 1")]
    ZeroAlternatives,

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Traffic(#[from] TrafficError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
