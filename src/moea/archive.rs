//! Running non-dominated archive.
//!
//! [`ParetoArchive`] keeps every non-dominated individual it has been
//! offered across the whole run. Its size is unbounded; it grows only as
//! far as the Pareto front of all offered individuals.

use super::dominance::{dominance_cmp, Dominance};
use super::types::{Individual, ObjectiveVector, Sense};

/// Best-known non-dominated set.
///
/// Invariants:
///
/// - no member dominates another member;
/// - no member is dominated by any individual previously offered;
/// - no two members share both objective vector and genotype;
/// - members are ordered best-first lexicographically under the senses.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoArchive<I> {
    senses: Vec<Sense>,
    members: Vec<I>,
}

impl<I: Individual + PartialEq> ParetoArchive<I> {
    /// Creates an empty archive for objectives with the given senses.
    pub fn new(senses: &[Sense]) -> Self {
        Self {
            senses: senses.to_vec(),
            members: Vec::new(),
        }
    }

    /// Offers one individual to the archive.
    ///
    /// Returns `true` if it was added. Individuals without a valid fitness
    /// are ignored.
    pub fn insert(&mut self, individual: &I) -> bool {
        let Some(candidate) = individual.fitness() else {
            log::trace!("archive ignored an individual without fitness");
            return false;
        };

        let mut to_remove = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            let held = member_fitness(member);
            match dominance_cmp(held.values(), candidate.values(), &self.senses) {
                // Members are mutually non-dominated, so nothing is pending removal.
                Dominance::Left => return false,
                Dominance::Right => to_remove.push(i),
                Dominance::Neither => {
                    if held == candidate && member == individual {
                        return false;
                    }
                }
            }
        }

        for &i in to_remove.iter().rev() {
            self.members.remove(i);
        }
        if !to_remove.is_empty() {
            log::trace!("archive dropped {} dominated member(s)", to_remove.len());
        }

        let pos = self.members.partition_point(|m| {
            member_fitness(m).cmp_better(candidate, &self.senses) != std::cmp::Ordering::Greater
        });
        self.members.insert(pos, individual.clone());
        true
    }

    /// Offers every individual of `population`. Returns the number added.
    pub fn update(&mut self, population: &[I]) -> usize {
        population.iter().filter(|ind| self.insert(ind)).count()
    }
}

impl<I: Individual> ParetoArchive<I> {
    /// Archived individuals, best-first.
    pub fn members(&self) -> &[I] {
        &self.members
    }

    /// Number of archived individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nothing has been archived.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Senses the archive compares with.
    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    /// Iterates over archived individuals, best-first.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.members.iter()
    }

    /// Consumes the archive, returning its members.
    pub fn into_members(self) -> Vec<I> {
        self.members
    }
}

impl<'a, I: Individual> IntoIterator for &'a ParetoArchive<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

fn member_fitness<I: Individual>(member: &I) -> &ObjectiveVector {
    member
        .fitness()
        .expect("archive only holds individuals with valid fitness")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNAPSACK: [Sense; 2] = [Sense::Minimize, Sense::Maximize];

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        tag: u32,
        fitness: Option<ObjectiveVector>,
    }

    impl Individual for Tagged {
        fn fitness(&self) -> Option<&ObjectiveVector> {
            self.fitness.as_ref()
        }
        fn set_fitness(&mut self, f: ObjectiveVector) {
            self.fitness = Some(f);
        }
        fn invalidate_fitness(&mut self) {
            self.fitness = None;
        }
    }

    fn ind(tag: u32, w: f64, v: f64) -> Tagged {
        Tagged {
            tag,
            fitness: Some(ObjectiveVector::new(vec![w, v])),
        }
    }

    fn tags(archive: &ParetoArchive<Tagged>) -> Vec<u32> {
        archive.iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_insert_into_empty() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        assert!(archive.insert(&ind(1, 5.0, 30.0)));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_dominated_candidate_rejected() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        archive.insert(&ind(1, 5.0, 30.0));
        assert!(!archive.insert(&ind(2, 10000.0, 0.0)));
        assert_eq!(tags(&archive), vec![1]);
    }

    #[test]
    fn test_dominating_candidate_evicts() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        archive.insert(&ind(1, 6.0, 20.0));
        archive.insert(&ind(2, 1.0, 5.0));
        assert!(archive.insert(&ind(3, 5.0, 30.0)));
        assert_eq!(tags(&archive), vec![2, 3]);
    }

    #[test]
    fn test_idempotent_insert() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        let a = ind(1, 5.0, 30.0);
        assert!(archive.insert(&a));
        assert!(!archive.insert(&a));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_equal_fitness_different_genotype_kept() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        archive.insert(&ind(1, 5.0, 30.0));
        assert!(archive.insert(&ind(2, 5.0, 30.0)));
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_unevaluated_ignored() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        let mut a = ind(1, 1.0, 1.0);
        a.invalidate_fitness();
        assert!(!archive.insert(&a));
        assert!(archive.is_empty());
    }

    #[test]
    fn test_members_ordered_best_first() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        let added = archive.update(&[
            ind(1, 9.0, 50.0),
            ind(2, 1.0, 4.0),
            ind(3, 4.0, 22.0),
            ind(4, 4.0, 21.0), // dominated by 3
        ]);
        assert_eq!(added, 3);
        assert_eq!(tags(&archive), vec![2, 3, 1]);
    }

    #[test]
    fn test_members_mutually_non_dominated() {
        let mut archive = ParetoArchive::new(&KNAPSACK);
        let pop: Vec<Tagged> = (0..30)
            .map(|i| {
                let w = (i * 7 % 11) as f64;
                let v = (i * 13 % 17) as f64;
                ind(i, w, v)
            })
            .collect();
        archive.update(&pop);

        let members = archive.members();
        for a in members {
            for b in members {
                assert!(!crate::moea::dominance::dominates(
                    a.fitness().unwrap().values(),
                    b.fitness().unwrap().values(),
                    &KNAPSACK
                ));
            }
            for p in &pop {
                assert!(!crate::moea::dominance::dominates(
                    p.fitness().unwrap().values(),
                    a.fitness().unwrap().values(),
                    &KNAPSACK
                ));
            }
        }
    }
}
