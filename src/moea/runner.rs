//! (μ+λ) evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the complete run:
//! initialization → variation → evaluation → survivor selection → report → repeat.

use super::archive::ParetoArchive;
use super::config::EngineConfig;
use super::error::ConfigError;
use super::selection::{Nsga2, Selector};
use super::stats::{Logbook, StatisticsCollector};
use super::types::{Crossover, Evaluator, Individual, Initializer, Mutation, ObjectiveVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<I> {
    /// Final μ parents, all with valid fitness.
    pub population: Vec<I>,

    /// Non-dominated individuals seen during the run.
    pub archive: ParetoArchive<I>,

    /// Per-generation statistics, generation 0 included.
    pub logbook: Logbook,

    /// Number of generations executed after initialization.
    pub generations: usize,

    /// Total number of fitness evaluations.
    pub evaluations: usize,
}

/// Executes the (μ+λ) loop with injected operators.
///
/// # Usage
///
/// ```ignore
/// let engine = EvolutionEngine::new(config, initializer, evaluator, crossover, mutation)?;
/// let result = engine.run();
/// println!("{}", result.logbook);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine<Z, E, C, M, S = Nsga2> {
    config: EngineConfig,
    initializer: Z,
    evaluator: E,
    crossover: C,
    mutation: M,
    selector: S,
}

impl<Z, E, C, M> EvolutionEngine<Z, E, C, M, Nsga2>
where
    Z: Initializer,
    E: Evaluator<Z::Individual>,
    C: Crossover<Z::Individual>,
    M: Mutation<Z::Individual>,
    Z::Individual: PartialEq,
{
    /// Creates an engine using NSGA-II survivor selection.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(
        config: EngineConfig,
        initializer: Z,
        evaluator: E,
        crossover: C,
        mutation: M,
    ) -> Result<Self, ConfigError> {
        Self::with_selector(config, initializer, evaluator, crossover, mutation, Nsga2)
    }
}

impl<Z, E, C, M, S> EvolutionEngine<Z, E, C, M, S>
where
    Z: Initializer,
    E: Evaluator<Z::Individual>,
    C: Crossover<Z::Individual>,
    M: Mutation<Z::Individual>,
    S: Selector,
    Z::Individual: PartialEq,
{
    /// Creates an engine with a custom survivor selector.
    pub fn with_selector(
        config: EngineConfig,
        initializer: Z,
        evaluator: E,
        crossover: C,
        mutation: M,
        selector: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            initializer,
            evaluator,
            crossover,
            mutation,
            selector,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Runs the engine with an RNG built from the configured seed.
    pub fn run(&self) -> EvolutionResult<Z::Individual> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the engine with a caller-supplied RNG, recording into a [`Logbook`].
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> EvolutionResult<Z::Individual> {
        let mut logbook = Logbook::new();
        let (population, archive, evaluations) = self.run_with_collector(rng, &mut logbook);
        EvolutionResult {
            population,
            archive,
            logbook,
            generations: self.config.generations,
            evaluations,
        }
    }

    /// Runs the engine, reporting every generation to `collector`.
    ///
    /// Returns the final population, the archive and the total number of
    /// evaluations.
    pub fn run_with_collector<R: Rng, T: StatisticsCollector>(
        &self,
        rng: &mut R,
        collector: &mut T,
    ) -> (Vec<Z::Individual>, ParetoArchive<Z::Individual>, usize) {
        let mu = self.config.population_size;
        let senses = self.evaluator.senses();

        log::info!(
            "starting (mu+lambda) run: mu={}, lambda={}, cxpb={}, mutpb={}, ngen={}",
            mu,
            self.config.offspring_count,
            self.config.crossover_rate,
            self.config.mutation_rate,
            self.config.generations
        );

        // INIT
        let mut population: Vec<Z::Individual> =
            (0..mu).map(|_| self.initializer.create(rng)).collect();
        let mut evaluations = self.evaluate_invalid(&mut population);

        let mut archive = ParetoArchive::new(senses);
        archive.update(&population);
        collector.record(0, evaluations, &objectives_of(&population));

        for generation in 1..=self.config.generations {
            // GENERATE_OFFSPRING
            let mut offspring = self.vary(&population, rng);

            // EVALUATE_OFFSPRING
            let nevals = self.evaluate_invalid(&mut offspring);
            evaluations += nevals;
            archive.update(&offspring);

            // SELECT
            population.append(&mut offspring);
            let pool: Vec<ObjectiveVector> = objectives_of(&population)
                .into_iter()
                .cloned()
                .collect();
            let survivors = self.selector.select(&pool, senses, mu);
            population = take_indices(population, &survivors);

            // REPORT
            archive.update(&population);
            collector.record(generation, nevals, &objectives_of(&population));

            log::debug!(
                "generation {}: {} evaluations, archive size {}",
                generation,
                nevals,
                archive.len()
            );
        }

        log::info!(
            "run finished: {} evaluations, {} archived individuals",
            evaluations,
            archive.len()
        );

        (population, archive, evaluations)
    }

    /// Produces λ offspring. Each child receives at most one variation:
    /// crossover, mutation or plain reproduction.
    fn vary<R: Rng>(&self, population: &[Z::Individual], rng: &mut R) -> Vec<Z::Individual> {
        let n = population.len();
        let cxpb = self.config.crossover_rate;
        let mutpb = self.config.mutation_rate;

        let mut offspring = Vec::with_capacity(self.config.offspring_count);
        for _ in 0..self.config.offspring_count {
            let roll: f64 = rng.random();

            let child = if roll < cxpb {
                let picks = rand::seq::index::sample(rng, n, 2);
                let mut first = population[picks.index(0)].clone();
                let mut second = population[picks.index(1)].clone();
                self.crossover.crossover(&mut first, &mut second, rng);
                first.invalidate_fitness();
                first
            } else if roll < cxpb + mutpb {
                let mut child = population[rng.random_range(0..n)].clone();
                self.mutation.mutate(&mut child, rng);
                child.invalidate_fitness();
                child
            } else {
                population[rng.random_range(0..n)].clone()
            };

            offspring.push(child);
        }
        offspring
    }

    /// Evaluates every individual lacking a valid fitness.
    ///
    /// Returns the number of evaluations performed.
    fn evaluate_invalid(&self, individuals: &mut [Z::Individual]) -> usize {
        let pending: Vec<&mut Z::Individual> = individuals
            .iter_mut()
            .filter(|ind| !ind.has_valid_fitness())
            .collect();
        let count = pending.len();
        self.evaluate_all(pending);
        count
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, pending: Vec<&mut Z::Individual>) {
        use rayon::prelude::*;

        if self.config.parallel {
            pending.into_par_iter().for_each(|ind| self.assign_fitness(ind));
        } else {
            pending.into_iter().for_each(|ind| self.assign_fitness(ind));
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, pending: Vec<&mut Z::Individual>) {
        pending.into_iter().for_each(|ind| self.assign_fitness(ind));
    }

    fn assign_fitness(&self, individual: &mut Z::Individual) {
        let f = self.evaluator.evaluate(individual);
        individual.set_fitness(f);
    }
}

fn objectives_of<I: Individual>(population: &[I]) -> Vec<&ObjectiveVector> {
    population
        .iter()
        .map(|ind| {
            ind.fitness()
                .expect("population is fully evaluated before selection and reporting")
        })
        .collect()
}

/// Moves the individuals at `indices` out of `pool`, in `indices` order.
fn take_indices<I>(pool: Vec<I>, indices: &[usize]) -> Vec<I> {
    let mut slots: Vec<Option<I>> = pool.into_iter().map(Some).collect();
    indices.iter().filter_map(|&i| slots[i].take()).collect()
}

// ============================================================================
// Tests
// ============================================================================
