//! Engine configuration.
//!
//! [`EngineConfig`] holds all parameters that control the (μ+λ) loop.

use super::error::ConfigError;

/// Configuration for the (μ+λ) evolutionary engine.
///
/// # Defaults
///
/// ```
/// use u_mokp::moea::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.offspring_count, 100);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mokp::moea::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(80)
///     .with_offspring_count(160)
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.3)
///     .with_seed(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of parents kept each generation (μ).
    pub population_size: usize,

    /// Number of offspring produced each generation (λ).
    pub offspring_count: usize,

    /// Probability that an offspring is produced by crossover (CXPB).
    pub crossover_rate: f64,

    /// Probability that an offspring is produced by mutation (MUTPB).
    ///
    /// Crossover and mutation are exclusive per offspring, so
    /// `crossover_rate + mutation_rate` must not exceed 1. The remaining
    /// probability mass is plain reproduction.
    pub mutation_rate: f64,

    /// Number of generations after initialization (NGEN).
    pub generations: usize,

    /// Seed for the run RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            offspring_count: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            generations: 50,
            seed: None,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Sets the population size (μ).
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation (λ).
    pub fn with_offspring_count(mut self, n: usize) -> Self {
        self.offspring_count = n;
        self
    }

    /// Sets CXPB, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets MUTPB, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Fixes the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks μ and the variation rates.
    ///
    /// Zero generations and zero offspring are both accepted. With zero
    /// generations the run stops after reporting generation 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;

        let total = self.crossover_rate + self.mutation_rate;
        if total > 1.0 + f64::EPSILON {
            return Err(ConfigError::RatesExceedOne(total));
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
