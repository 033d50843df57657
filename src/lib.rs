//! Multi-objective knapsack optimization with NSGA-II.
//!
//! The crate is split into a problem-agnostic engine and one problem:
//!
//! - **[`moea`]**: (μ+λ) evolutionary loop with NSGA-II survivor selection,
//!   Pareto dominance utilities, a Pareto archive and per-generation
//!   statistics. Problems plug in through the [`moea::Initializer`],
//!   [`moea::Evaluator`], [`moea::Crossover`] and [`moea::Mutation`] traits.
//! - **[`knapsack`]**: Set-encoded 0/1 knapsack that minimizes total weight
//!   and maximizes total value under item count and weight limits.
//!
//! # Features
//!
//! - `parallel`: evaluate offspring with rayon when
//!   [`moea::EngineConfig::parallel`] is set
//! - `serde`: serialization for configurations, individuals and results

pub mod knapsack;
pub mod moea;
