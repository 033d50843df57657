//! Multi-objective evolutionary engine.
//!
//! A generic, problem-agnostic (μ+λ) engine with NSGA-II survivor
//! selection. Problems plug in through capability traits; the engine owns
//! the loop, the Pareto archive and the statistics.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached, invalidatable objective vector
//! - [`Initializer`], [`Evaluator`], [`Crossover`], [`Mutation`]: Problem operators
//! - [`Selector`]: Survivor selection over the parent + offspring pool
//! - [`StatisticsCollector`]: Receives each generation's objective vectors
//!
//! # Key Types
//!
//! - [`EngineConfig`]: Algorithm parameters (μ, λ, rates, generations, seed)
//! - [`EvolutionEngine`]: Executes the evolutionary loop
//! - [`EvolutionResult`]: Final population, archive and logbook
//! - [`ParetoArchive`]: Best-known non-dominated set
//!
//! # Submodules
//!
//! - [`dominance`]: Pareto dominance, non-dominated sorting and crowding distance
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Beyer & Schwefel (2002), *Evolution strategies: A comprehensive introduction*

mod archive;
mod config;
pub mod dominance;
mod error;
mod runner;
mod selection;
mod stats;
mod types;

pub use archive::ParetoArchive;
pub use config::EngineConfig;
pub use error::ConfigError;
pub use runner::{EvolutionEngine, EvolutionResult};
pub use selection::{select_nsga2, Nsga2, Selector};
pub use stats::{GenerationStats, Logbook, StatisticsCollector};
pub use types::{Crossover, Evaluator, Individual, Initializer, Mutation, ObjectiveVector, Sense};
