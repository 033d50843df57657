//! Set-based genetic operators.
//!
//! # Crossover
//!
//! - [`set_crossover`]: intersection / symmetric difference recombination
//!
//! # Mutation
//!
//! - [`add_remove_mutation`]: drop one member or add one random item
//!
//! # Initialization
//!
//! - [`RandomSetInitializer`]: fixed number of uniform draws, duplicates collapse

use super::individual::ItemSet;
use crate::moea::{Crossover, Individual, Initializer, Mutation};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Set recombination.
///
/// `a` becomes `a ∩ b` and `b` becomes `a △ b`, both computed from the
/// original members. The pair is ordered: swapping the arguments swaps
/// which child receives which result. Both fitnesses are cleared.
///
/// # Example
///
/// ```
/// use u_mokp::knapsack::{operators::set_crossover, ItemSet};
///
/// let mut a: ItemSet = [1, 2, 3].into_iter().collect();
/// let mut b: ItemSet = [2, 3, 4].into_iter().collect();
/// set_crossover(&mut a, &mut b);
///
/// assert_eq!(a.to_string(), "{2, 3}");
/// assert_eq!(b.to_string(), "{1, 4}");
/// ```
pub fn set_crossover(a: &mut ItemSet, b: &mut ItemSet) {
    let original = a.members().clone();
    a.intersect_with(b.members());
    b.symmetric_difference_with(&original);
}

/// [`Crossover`] adapter for [`set_crossover`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SetCrossover;

impl Crossover<ItemSet> for SetCrossover {
    fn crossover<R: Rng>(&self, a: &mut ItemSet, b: &mut ItemSet, _rng: &mut R) {
        set_crossover(a, b);
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Add/remove mutation.
///
/// With probability 0.5 a non-empty set loses the member at a uniformly
/// drawn position of its ascending order. Otherwise, or when the set is
/// empty, an id drawn uniformly from `0..item_count` is added; drawing an
/// existing member leaves the set unchanged. The fitness is always cleared.
///
/// # Panics
///
/// Panics if the add branch is taken with `item_count == 0`.
pub fn add_remove_mutation<R: Rng>(set: &mut ItemSet, item_count: usize, rng: &mut R) {
    let remove = rng.random_bool(0.5);
    if remove && !set.is_empty() {
        let pos = rng.random_range(0..set.len());
        set.remove_nth(pos);
    } else {
        set.insert(rng.random_range(0..item_count));
    }
    set.invalidate_fitness();
}

/// [`Mutation`] adapter for [`add_remove_mutation`].
#[derive(Debug, Clone, Copy)]
pub struct AddRemoveMutation {
    item_count: usize,
}

impl AddRemoveMutation {
    pub fn new(item_count: usize) -> Self {
        Self { item_count }
    }
}

impl Mutation<ItemSet> for AddRemoveMutation {
    fn mutate<R: Rng>(&self, set: &mut ItemSet, rng: &mut R) {
        add_remove_mutation(set, self.item_count, rng);
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Builds sets from `initial_size` uniform draws over `0..item_count`.
///
/// Draws are with replacement, so a set may end up smaller than
/// `initial_size`.
#[derive(Debug, Clone, Copy)]
pub struct RandomSetInitializer {
    item_count: usize,
    initial_size: usize,
}

impl RandomSetInitializer {
    pub fn new(item_count: usize, initial_size: usize) -> Self {
        Self {
            item_count,
            initial_size,
        }
    }
}

impl Initializer for RandomSetInitializer {
    type Individual = ItemSet;

    fn create<R: Rng>(&self, rng: &mut R) -> ItemSet {
        (0..self.initial_size)
            .map(|_| rng.random_range(0..self.item_count))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
