use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrafficError {
    #[error("traffic multiplier must be positive and finite, got {0}")]
    InvalidMultiplier(f64),

    #[error("edge weight must be non-negative and finite, got {0}")]
    InvalidWeight(f64),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
