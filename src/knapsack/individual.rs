//! Set-encoded individual.

use super::catalog::ItemId;
use crate::moea::{Individual, ObjectiveVector};
use std::collections::BTreeSet;
use std::fmt;

/// A knapsack content: a set of item ids plus a cached objective vector.
///
/// Members are kept in ascending order, so positional access
/// ([`nth`](ItemSet::nth), [`remove_nth`](ItemSet::remove_nth)) is
/// deterministic. Every method that can change the members clears the
/// cached fitness, even when the call turns out to be a no-op.
///
/// Equality compares members only.
///
/// # Examples
///
/// ```
/// use u_mokp::knapsack::ItemSet;
/// use u_mokp::moea::Individual;
///
/// let mut set: ItemSet = [3, 1, 2].into_iter().collect();
/// assert_eq!(set.nth(0), Some(1));
///
/// set.insert(7);
/// assert!(!set.has_valid_fitness());
/// assert_eq!(set.to_string(), "{1, 2, 3, 7}");
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    members: BTreeSet<ItemId>,
    fitness: Option<ObjectiveVector>,
}

impl ItemSet {
    /// Creates an empty set with no fitness.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &BTreeSet<ItemId> {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.members.contains(&id)
    }

    /// The `n`-th smallest member.
    pub fn nth(&self, n: usize) -> Option<ItemId> {
        self.members.iter().nth(n).copied()
    }

    /// Adds `id`. Returns `false` if it was already a member.
    pub fn insert(&mut self, id: ItemId) -> bool {
        self.fitness = None;
        self.members.insert(id)
    }

    /// Removes `id`. Returns `false` if it was not a member.
    pub fn remove(&mut self, id: ItemId) -> bool {
        self.fitness = None;
        self.members.remove(&id)
    }

    /// Removes the `n`-th smallest member and returns it.
    pub fn remove_nth(&mut self, n: usize) -> Option<ItemId> {
        let id = self.nth(n)?;
        self.remove(id);
        Some(id)
    }

    /// Keeps only members also present in `other`.
    pub fn intersect_with(&mut self, other: &BTreeSet<ItemId>) {
        self.fitness = None;
        self.members.retain(|id| other.contains(id));
    }

    /// Replaces the members with the symmetric difference against `other`.
    pub fn symmetric_difference_with(&mut self, other: &BTreeSet<ItemId>) {
        self.fitness = None;
        self.members = self.members.symmetric_difference(other).copied().collect();
    }
}

impl Individual for ItemSet {
    fn fitness(&self) -> Option<&ObjectiveVector> {
        self.fitness.as_ref()
    }

    fn set_fitness(&mut self, fitness: ObjectiveVector) {
        self.fitness = Some(fitness);
    }

    fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }
}

impl PartialEq for ItemSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ItemSet {}

impl FromIterator<ItemId> for ItemSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
            fitness: None,
        }
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(ids: &[ItemId]) -> ItemSet {
        let mut set: ItemSet = ids.iter().copied().collect();
        set.set_fitness(ObjectiveVector::new(vec![1.0, 1.0]));
        set
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: ItemSet = [4, 4, 1, 4].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(4));
    }

    #[test]
    fn test_every_mutator_invalidates() {
        let mut set = evaluated(&[1, 2, 3]);
        set.insert(9);
        assert!(!set.has_valid_fitness());

        let mut set = evaluated(&[1, 2, 3]);
        set.remove(2);
        assert!(!set.has_valid_fitness());

        let mut set = evaluated(&[1, 2, 3]);
        set.remove_nth(0);
        assert!(!set.has_valid_fitness());

        let mut set = evaluated(&[1, 2, 3]);
        set.intersect_with(&BTreeSet::from([2]));
        assert!(!set.has_valid_fitness());

        let mut set = evaluated(&[1, 2, 3]);
        set.symmetric_difference_with(&BTreeSet::from([2]));
        assert!(!set.has_valid_fitness());
    }

    #[test]
    fn test_no_op_insert_still_invalidates() {
        let mut set = evaluated(&[1]);
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(!set.has_valid_fitness());
    }

    #[test]
    fn test_remove_nth_uses_sorted_order() {
        let mut set: ItemSet = [9, 3, 5].into_iter().collect();
        assert_eq!(set.remove_nth(1), Some(5));
        assert_eq!(set.remove_nth(5), None);
        assert_eq!(set.members(), &BTreeSet::from([3, 9]));
    }

    #[test]
    fn test_equality_ignores_fitness() {
        let a = evaluated(&[1, 2]);
        let b: ItemSet = [2, 1].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemSet::new().to_string(), "{}");
        let set: ItemSet = [10, 2].into_iter().collect();
        assert_eq!(set.to_string(), "{2, 10}");
    }
}
