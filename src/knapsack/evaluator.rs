//! Knapsack objective function.
//!
//! Objectives are `(weight, value)`: weight is minimized, value maximized.
//! Capacity constraints are not rejected as errors; a violating set scores
//! the [`INFEASIBLE_WEIGHT`]/[`INFEASIBLE_VALUE`] sentinel, which every
//! feasible set dominates.

use super::catalog::{ItemCatalog, ItemId};
use super::individual::ItemSet;
use crate::moea::{Evaluator, ObjectiveVector, Sense};
use std::sync::Arc;

/// Weight reported for an infeasible set.
pub const INFEASIBLE_WEIGHT: f64 = 10_000.0;

/// Value reported for an infeasible set.
pub const INFEASIBLE_VALUE: f64 = 0.0;

/// Axis of the total weight in the objective vector.
pub const WEIGHT: usize = 0;

/// Axis of the total value in the objective vector.
pub const VALUE: usize = 1;

/// Objective senses in axis order.
pub const SENSES: [Sense; 2] = [Sense::Minimize, Sense::Maximize];

/// Scores item sets against a catalog and capacity limits.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mokp::knapsack::{ItemCatalog, ItemSet, KnapsackEvaluator};
/// use u_mokp::moea::Evaluator;
///
/// let catalog = ItemCatalog::from_pairs(&[(2.0, 10.0), (3.0, 20.0), (5.0, 5.0)]).unwrap();
/// let evaluator = KnapsackEvaluator::new(Arc::new(catalog), 2, 5.0);
///
/// let pair: ItemSet = [0, 1].into_iter().collect();
/// assert_eq!(evaluator.evaluate(&pair).values(), &[5.0, 30.0]);
///
/// let all: ItemSet = [0, 1, 2].into_iter().collect();
/// assert_eq!(evaluator.evaluate(&all).values(), &[10_000.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackEvaluator {
    catalog: Arc<ItemCatalog>,
    max_items: usize,
    max_weight: f64,
}

impl KnapsackEvaluator {
    pub fn new(catalog: Arc<ItemCatalog>, max_items: usize, max_weight: f64) -> Self {
        Self {
            catalog,
            max_items,
            max_weight,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Total weight and value of `members`, or `None` if an id is not in
    /// the catalog.
    pub fn totals<'a>(&self, members: impl IntoIterator<Item = &'a ItemId>) -> Option<(f64, f64)> {
        members
            .into_iter()
            .try_fold((0.0, 0.0), |(weight, value), &id| {
                self.catalog
                    .get(id)
                    .map(|item| (weight + item.weight, value + item.value))
            })
    }

    /// Returns `true` if `set` respects both capacity limits and only
    /// references catalog items.
    pub fn is_feasible(&self, set: &ItemSet) -> bool {
        set.len() <= self.max_items
            && self
                .totals(set.members())
                .is_some_and(|(weight, _)| weight <= self.max_weight)
    }

    /// The sentinel vector assigned to infeasible sets.
    pub fn infeasible() -> ObjectiveVector {
        ObjectiveVector::new(vec![INFEASIBLE_WEIGHT, INFEASIBLE_VALUE])
    }
}

impl Evaluator<ItemSet> for KnapsackEvaluator {
    fn senses(&self) -> &[Sense] {
        &SENSES
    }

    fn evaluate(&self, set: &ItemSet) -> ObjectiveVector {
        if set.len() > self.max_items {
            return Self::infeasible();
        }
        match self.totals(set.members()) {
            Some((weight, value)) if weight <= self.max_weight => {
                ObjectiveVector::new(vec![weight, value])
            }
            _ => Self::infeasible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moea::dominance::dominates;

    fn evaluator(max_items: usize, max_weight: f64) -> KnapsackEvaluator {
        let catalog = ItemCatalog::from_pairs(&[(2.0, 10.0), (3.0, 20.0), (5.0, 5.0)]).unwrap();
        KnapsackEvaluator::new(Arc::new(catalog), max_items, max_weight)
    }

    fn set(ids: &[ItemId]) -> ItemSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_feasible_pair_scores_sums() {
        let eval = evaluator(2, 5.0);
        let score = eval.evaluate(&set(&[0, 1]));
        assert_eq!(score.values(), &[5.0, 30.0]);
        assert!(eval.is_feasible(&set(&[0, 1])));
    }

    #[test]
    fn test_infeasible_set_is_dominated_by_feasible_pair() {
        let eval = evaluator(2, 5.0);
        let feasible = eval.evaluate(&set(&[0, 1]));
        let infeasible = eval.evaluate(&set(&[0, 1, 2]));

        assert_eq!(infeasible.values(), &[INFEASIBLE_WEIGHT, INFEASIBLE_VALUE]);
        assert!(dominates(feasible.values(), infeasible.values(), &SENSES));
    }

    #[test]
    fn test_overweight_only() {
        // Count limit is fine, weight limit is not
        let eval = evaluator(10, 4.0);
        assert_eq!(eval.evaluate(&set(&[0, 1])), KnapsackEvaluator::infeasible());
        assert!(!eval.is_feasible(&set(&[0, 1])));
    }

    #[test]
    fn test_over_count_only() {
        let eval = evaluator(1, 100.0);
        assert_eq!(eval.evaluate(&set(&[0, 2])), KnapsackEvaluator::infeasible());
    }

    #[test]
    fn test_weight_limit_is_inclusive() {
        let eval = evaluator(3, 10.0);
        assert_eq!(eval.evaluate(&set(&[0, 1, 2])).values(), &[10.0, 35.0]);
    }

    #[test]
    fn test_empty_set_is_feasible_origin() {
        let eval = evaluator(2, 5.0);
        assert_eq!(eval.evaluate(&ItemSet::new()).values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_unknown_item_is_infeasible() {
        let eval = evaluator(5, 50.0);
        assert_eq!(eval.evaluate(&set(&[0, 42])), KnapsackEvaluator::infeasible());
        assert!(eval.totals(&[0, 42]).is_none());
    }

    #[test]
    fn test_evaluation_does_not_attach_fitness() {
        use crate::moea::Individual;
        let eval = evaluator(2, 5.0);
        let s = set(&[0]);
        let _ = eval.evaluate(&s);
        assert!(!s.has_valid_fitness());
    }
}
