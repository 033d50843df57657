//! Wiring of the knapsack operators into the evolutionary engine.

use super::catalog::ItemCatalog;
use super::config::KnapsackConfig;
use super::error::KnapsackError;
use super::evaluator::KnapsackEvaluator;
use super::operators::{AddRemoveMutation, RandomSetInitializer, SetCrossover};
use crate::moea::{EngineConfig, EvolutionEngine};
use std::sync::Arc;

/// Engine specialized for the knapsack problem.
pub type KnapsackEngine =
    EvolutionEngine<RandomSetInitializer, KnapsackEvaluator, SetCrossover, AddRemoveMutation>;

/// A validated catalog plus capacity limits.
///
/// # Examples
///
/// ```
/// use u_mokp::knapsack::{ItemCatalog, KnapsackConfig, KnapsackProblem};
/// use u_mokp::moea::EngineConfig;
///
/// let catalog = ItemCatalog::from_pairs(&[(2.0, 10.0), (3.0, 20.0), (5.0, 5.0)]).unwrap();
/// let problem = KnapsackProblem::new(catalog, KnapsackConfig::default().with_max_weight(5.0)).unwrap();
///
/// let engine = problem
///     .engine(EngineConfig::default().with_generations(5).with_seed(1))
///     .unwrap();
/// let result = engine.run();
/// assert_eq!(result.population.len(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: Arc<ItemCatalog>,
    config: KnapsackConfig,
}

impl KnapsackProblem {
    /// Validates `config` and requires a non-empty catalog.
    pub fn new(catalog: ItemCatalog, config: KnapsackConfig) -> Result<Self, KnapsackError> {
        if catalog.is_empty() {
            return Err(KnapsackError::EmptyCatalog);
        }
        config.validate()?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &KnapsackConfig {
        &self.config
    }

    pub fn evaluator(&self) -> KnapsackEvaluator {
        KnapsackEvaluator::new(
            Arc::clone(&self.catalog),
            self.config.max_items,
            self.config.max_weight,
        )
    }

    pub fn initializer(&self) -> RandomSetInitializer {
        RandomSetInitializer::new(self.catalog.len(), self.config.initial_size)
    }

    pub fn mutation(&self) -> AddRemoveMutation {
        AddRemoveMutation::new(self.catalog.len())
    }

    /// Builds an engine with NSGA-II survivor selection.
    pub fn engine(&self, config: EngineConfig) -> Result<KnapsackEngine, KnapsackError> {
        let engine = EvolutionEngine::new(
            config,
            self.initializer(),
            self.evaluator(),
            SetCrossover,
            self.mutation(),
        )?;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::evaluator::{INFEASIBLE_WEIGHT, SENSES, VALUE, WEIGHT};
    use crate::moea::dominance::dominates;
    use crate::knapsack::ItemSet;
    use crate::moea::{ConfigError, Evaluator, EvolutionResult, Individual, ParetoArchive};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Twenty random items from the fixed catalog seed.
    fn standard_problem() -> KnapsackProblem {
        let mut rng = StdRng::seed_from_u64(72);
        let catalog = ItemCatalog::random(20, &mut rng);
        KnapsackProblem::new(catalog, KnapsackConfig::default()).unwrap()
    }

    fn run(problem: &KnapsackProblem, generations: usize, seed: u64) -> EvolutionResult<ItemSet> {
        problem
            .engine(EngineConfig::default().with_generations(generations).with_seed(seed))
            .unwrap()
            .run()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err =
            KnapsackProblem::new(ItemCatalog::default(), KnapsackConfig::default()).unwrap_err();
        assert_eq!(err, KnapsackError::EmptyCatalog);
    }

    #[test]
    fn test_invalid_engine_config_surfaces() {
        let problem = standard_problem();
        let err = problem
            .engine(EngineConfig::default().with_population_size(1))
            .unwrap_err();
        assert_eq!(err, KnapsackError::Engine(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_final_population_is_evaluated_and_consistent() {
        let problem = standard_problem();
        let evaluator = problem.evaluator();
        let result = run(&problem, 20, 64);

        assert_eq!(result.population.len(), 50);
        for ind in &result.population {
            assert_eq!(ind.fitness(), Some(&evaluator.evaluate(ind)));
        }
    }

    #[test]
    fn test_archive_holds_only_feasible_non_dominated_sets() {
        let problem = standard_problem();
        let evaluator = problem.evaluator();
        let result = run(&problem, 30, 7);

        assert!(!result.archive.is_empty());
        let members = result.archive.members();
        for a in members {
            assert!(evaluator.is_feasible(a), "infeasible set {a} archived");
            let fa = a.fitness().unwrap().values();
            for b in members {
                assert!(!dominates(b.fitness().unwrap().values(), fa, &SENSES));
            }
        }
    }

    #[test]
    fn test_infeasible_sets_do_not_survive() {
        // The default limits are loose; a tight weight limit forces penalties
        let mut rng = StdRng::seed_from_u64(72);
        let catalog = ItemCatalog::random(20, &mut rng);
        let problem =
            KnapsackProblem::new(catalog, KnapsackConfig::default().with_max_weight(15.0)).unwrap();
        let result = run(&problem, 25, 3);

        // The empty set is always feasible, so the archive front beats the sentinel
        for ind in &result.archive {
            assert!(ind.fitness().unwrap().values()[WEIGHT] < INFEASIBLE_WEIGHT);
        }
        let last = result.logbook.last().unwrap();
        assert!(last.min[WEIGHT] <= 15.0);
    }

    #[test]
    fn test_archive_best_value_grows_with_run_length() {
        let problem = standard_problem();
        let short = run(&problem, 5, 11);
        let long = run(&problem, 40, 11);

        let best = |archive: &ParetoArchive<ItemSet>| {
            archive
                .iter()
                .map(|ind| ind.fitness().unwrap().values()[VALUE])
                .fold(f64::NEG_INFINITY, f64::max)
        };
        // The long run replays the short run's random stream first
        assert!(best(&long.archive) >= best(&short.archive));
    }

    #[test]
    fn test_logbook_covers_every_generation() {
        let problem = standard_problem();
        let result = run(&problem, 12, 5);
        assert_eq!(result.logbook.len(), 13);
        assert_eq!(result.logbook.records()[0].evaluations, 50);
        assert_eq!(result.evaluations, result.logbook.total_evaluations());
    }
}
