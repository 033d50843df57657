//! Pareto dominance, non-dominated sorting and crowding distance.
//!
//! Objective vectors are plain `f64` slices; each axis is minimized or
//! maximized according to a parallel slice of [`Sense`]s.
//!
//! # Algorithms
//!
//! - [`dominance_cmp`] / [`dominates`]: pairwise Pareto comparison
//! - [`non_dominated_sort`]: rank every vector into successive fronts
//! - [`crowding_distance`]: spread of each vector within one front
//!
//! Both sorting and crowding follow Deb et al. (2002), IEEE TEC 6(2).

use super::types::{ObjectiveVector, Sense};

impl AsRef<[f64]> for ObjectiveVector {
    fn as_ref(&self) -> &[f64] {
        self.values()
    }
}

/// Fronts produced by [`non_dominated_sort`].
///
/// `ranks[i]` is the front index of input `i`; front 0 holds the vectors
/// no other input dominates.
#[derive(Debug, Clone, Default)]
pub struct NondominatedSortResult {
    /// Front index per input.
    pub ranks: Vec<usize>,

    /// Input indices of each front, ascending within a front.
    pub fronts: Vec<Vec<usize>>,
}

/// Dominance relation between two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Mutually non-dominated, or equal.
    Neither,
}

/// Compares two objective vectors for Pareto dominance.
pub fn dominance_cmp(a: &[f64], b: &[f64], senses: &[Sense]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "objective vectors differ in length");
    debug_assert_eq!(a.len(), senses.len(), "one sense per objective");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for ((&va, &vb), &sense) in a.iter().zip(b).zip(senses) {
        if sense.is_better(va, vb) {
            a_better_in_some = true;
        } else if sense.is_better(vb, va) {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Dominance::Neither;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Returns `true` if `a` dominates `b`: no worse on every objective and
/// strictly better on at least one.
///
/// # Example
///
/// ```
/// use u_mokp::moea::{dominance::dominates, Sense};
///
/// let senses = [Sense::Minimize, Sense::Maximize];
/// assert!(dominates(&[5.0, 30.0], &[10000.0, 0.0], &senses));
/// assert!(!dominates(&[5.0, 30.0], &[5.0, 30.0], &senses));
/// ```
#[inline]
pub fn dominates(a: &[f64], b: &[f64], senses: &[Sense]) -> bool {
    dominance_cmp(a, b, senses) == Dominance::Left
}

/// Partitions `objectives` into Pareto fronts.
///
/// Mutually non-dominating vectors share a front regardless of input order.
/// Runs in O(m·n²) for n vectors of m objectives.
///
/// # Example
///
/// ```
/// use u_mokp::moea::{dominance::non_dominated_sort, Sense};
///
/// // (weight, value): minimize weight, maximize value
/// let objectives = vec![
///     vec![2.0, 10.0],
///     vec![5.0, 30.0],
///     vec![4.0, 5.0], // dominated by the first
/// ];
/// let result = non_dominated_sort(&objectives, &[Sense::Minimize, Sense::Maximize]);
///
/// assert_eq!(result.ranks, vec![0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1], vec![2]]);
/// ```
pub fn non_dominated_sort<T: AsRef<[f64]>>(
    objectives: &[T],
    senses: &[Sense],
) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref(), senses) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // Every j < i has already been compared with i, so the count is final.
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts.last().expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        next_front.sort_unstable();
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance of each member of one front.
///
/// For every objective the front is sorted by that objective; the lowest and
/// highest members get `f64::INFINITY` and interior members accumulate
/// `(next - prev) / range`. An objective with zero range contributes nothing.
/// Fronts with fewer than three members are all boundary.
///
/// The distance does not depend on the optimization direction.
///
/// # Example
///
/// ```
/// use u_mokp::moea::dominance::crowding_distance;
///
/// let front = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
/// let distances = crowding_distance(&front);
///
/// assert!(distances[0].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// assert!(distances[2].is_infinite());
/// ```
pub fn crowding_distance<T: AsRef<[f64]>>(objectives: &[T]) -> Vec<f64> {
    let n = objectives.len();
    if n < 3 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for axis in 0..m {
        let value = |i: usize| objectives[i].as_ref()[axis];

        indices.sort_by(|&a, &b| {
            value(a)
                .partial_cmp(&value(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(indices[n - 1]) - value(indices[0]);
        if range <= 0.0 || !range.is_finite() {
            continue;
        }

        for w in indices.windows(3) {
            distances[w[1]] += (value(w[2]) - value(w[0])) / range;
        }
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================
