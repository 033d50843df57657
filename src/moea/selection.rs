//! Environmental (survivor) selection.
//!
//! After variation, parents and offspring compete together for the next
//! generation's slots. A [`Selector`] picks which pool indices survive.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use super::dominance::{crowding_distance, non_dominated_sort};
use super::types::{ObjectiveVector, Sense};
use std::cmp::Ordering;

/// Chooses survivors from a combined parent + offspring pool.
pub trait Selector: Send + Sync {
    /// Returns exactly `min(k, objectives.len())` distinct pool indices.
    fn select(&self, objectives: &[ObjectiveVector], senses: &[Sense], k: usize) -> Vec<usize>;
}

/// NSGA-II survivor selection: Pareto rank first, crowding distance second.
///
/// # Examples
///
/// ```
/// use u_mokp::moea::{Nsga2, ObjectiveVector, Selector, Sense};
///
/// let pool: Vec<ObjectiveVector> = vec![
///     vec![1.0, 10.0].into(),
///     vec![2.0, 20.0].into(),
///     vec![3.0, 5.0].into(), // dominated by both
/// ];
/// let survivors = Nsga2.select(&pool, &[Sense::Minimize, Sense::Maximize], 2);
/// assert_eq!(survivors, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nsga2;

impl Selector for Nsga2 {
    fn select(&self, objectives: &[ObjectiveVector], senses: &[Sense], k: usize) -> Vec<usize> {
        select_nsga2(objectives, senses, k)
    }
}

/// Selects `k` indices by whole fronts, breaking into the boundary front by
/// descending crowding distance.
///
/// Ties in crowding distance keep pool order. If `k` covers the whole pool,
/// every index is returned in front order.
///
/// # Complexity
///
/// O(m * n²) dominated by the non-dominated sort.
pub fn select_nsga2<T: AsRef<[f64]>>(objectives: &[T], senses: &[Sense], k: usize) -> Vec<usize> {
    let sorted = non_dominated_sort(objectives, senses);
    let mut chosen = Vec::with_capacity(k.min(objectives.len()));

    for front in &sorted.fronts {
        if chosen.len() == k {
            break;
        }

        if chosen.len() + front.len() <= k {
            chosen.extend_from_slice(front);
            continue;
        }

        let remaining = k - chosen.len();
        let front_objectives: Vec<&[f64]> =
            front.iter().map(|&i| objectives[i].as_ref()).collect();
        let distances = crowding_distance(&front_objectives);

        let mut order: Vec<usize> = (0..front.len()).collect();
        order.sort_by(|&a, &b| {
            distances[b]
                .partial_cmp(&distances[a])
                .unwrap_or(Ordering::Equal)
        });

        chosen.extend(order.into_iter().take(remaining).map(|pos| front[pos]));
        break;
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNAPSACK: [Sense; 2] = [Sense::Minimize, Sense::Maximize];

    fn pool(values: &[(f64, f64)]) -> Vec<ObjectiveVector> {
        values
            .iter()
            .map(|&(w, v)| ObjectiveVector::new(vec![w, v]))
            .collect()
    }

    #[test]
    fn test_whole_fronts_fit_exactly() {
        let objs = pool(&[(1.0, 10.0), (2.0, 20.0), (3.0, 5.0), (4.0, 4.0)]);
        let chosen = Nsga2.select(&objs, &KNAPSACK, 3);
        assert_eq!(chosen, vec![0, 1, 2]);
    }

    #[test]
    fn test_boundary_front_prefers_crowding() {
        // Five points on one front; keep three → both extremes plus the most isolated
        let objs = pool(&[
            (1.0, 1.0),
            (2.0, 2.0),
            (2.2, 2.2),
            (5.0, 5.0),
            (6.0, 6.0),
        ]);
        let chosen = Nsga2.select(&objs, &KNAPSACK, 3);
        assert_eq!(chosen.len(), 3);
        assert!(chosen.contains(&0));
        assert!(chosen.contains(&4));
        // (5,5) has the widest neighbourhood among interior points
        assert!(chosen.contains(&3));
    }

    #[test]
    fn test_dominated_front_only_fills_remainder() {
        let objs = pool(&[
            (10.0, 0.0),  // front 1
            (1.0, 5.0),   // front 0
            (10.0, 0.0),  // front 1
            (2.0, 9.0),   // front 0
            (10.0, 0.0),  // front 1
        ]);
        let chosen = Nsga2.select(&objs, &KNAPSACK, 3);
        assert_eq!(&chosen[..2], &[1, 3]);
        assert!([0, 2, 4].contains(&chosen[2]));
    }

    #[test]
    fn test_k_larger_than_pool() {
        let objs = pool(&[(1.0, 1.0), (2.0, 0.5)]);
        let chosen = Nsga2.select(&objs, &KNAPSACK, 10);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn test_k_zero() {
        let objs = pool(&[(1.0, 1.0)]);
        assert!(Nsga2.select(&objs, &KNAPSACK, 0).is_empty());
    }

    #[test]
    fn test_selected_indices_are_distinct() {
        let objs = pool(&[(3.0, 3.0); 8]);
        let mut chosen = Nsga2.select(&objs, &KNAPSACK, 5);
        chosen.sort_unstable();
        chosen.dedup();
        assert_eq!(chosen.len(), 5);
    }
}
