//! Knapsack problem errors.

use crate::moea::ConfigError;

/// Invalid catalog or problem configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnapsackError {
    #[error("item {id} has invalid weight {weight}: must be positive and finite")]
    InvalidWeight { id: usize, weight: f64 },
    #[error("item {id} has invalid value {value}: must be non-negative and finite")]
    InvalidValue { id: usize, value: f64 },
    #[error("item ids must be dense: found id {id} at position {position}")]
    NonDenseId { position: usize, id: usize },
    #[error("catalog must contain at least one item")]
    EmptyCatalog,
    #[error("max_weight must be finite, non-negative and below {limit}, got {value}")]
    InvalidMaxWeight { value: f64, limit: f64 },
    #[error("engine configuration: {0}")]
    Engine(#[from] ConfigError),
}
