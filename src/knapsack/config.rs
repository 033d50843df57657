//! Knapsack problem configuration.

use super::error::KnapsackError;
use super::evaluator::INFEASIBLE_WEIGHT;

/// Capacity limits and initial set size.
///
/// # Examples
///
/// ```
/// use u_mokp::knapsack::KnapsackConfig;
///
/// let config = KnapsackConfig::default()
///     .with_max_weight(30.0)
///     .with_max_items(8);
/// assert_eq!(config.initial_size, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackConfig {
    /// Number of random draws used to build each initial set.
    pub initial_size: usize,

    /// Maximum number of items in a feasible set.
    pub max_items: usize,

    /// Maximum total weight of a feasible set.
    ///
    /// Must stay below the infeasible sentinel weight so that every
    /// feasible set dominates every infeasible one.
    pub max_weight: f64,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            initial_size: 5,
            max_items: 50,
            max_weight: 50.0,
        }
    }
}

impl KnapsackConfig {
    pub fn with_initial_size(mut self, n: usize) -> Self {
        self.initial_size = n;
        self
    }

    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    pub fn with_max_weight(mut self, weight: f64) -> Self {
        self.max_weight = weight;
        self
    }

    pub fn validate(&self) -> Result<(), KnapsackError> {
        if !(self.max_weight.is_finite()
            && self.max_weight >= 0.0
            && self.max_weight < INFEASIBLE_WEIGHT)
        {
            return Err(KnapsackError::InvalidMaxWeight {
                value: self.max_weight,
                limit: INFEASIBLE_WEIGHT,
            });
        }
        Ok(())
    }
}
