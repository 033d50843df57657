//! Engine configuration errors.

/// Invalid [`EngineConfig`](super::EngineConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("crossover_rate + mutation_rate must not exceed 1, got {0}")]
    RatesExceedOne(f64),
}
