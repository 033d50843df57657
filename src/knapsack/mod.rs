//! Multi-objective 0/1 knapsack.
//!
//! Individuals are sets of item ids scored on `(total weight, total value)`:
//! weight is minimized and value maximized. Sets that exceed the item count
//! or weight limit receive a sentinel score that every feasible set
//! dominates.
//!
//! # Key Types
//!
//! - [`ItemCatalog`]: Immutable table of item weights and values
//! - [`ItemSet`]: Set-encoded individual
//! - [`KnapsackEvaluator`]: Objective function with capacity penalties
//! - [`KnapsackProblem`]: Validated catalog and limits, builds a [`KnapsackEngine`]
//!
//! # Operators
//!
//! See [`operators`] for the set crossover, the add/remove mutation and the
//! random initializer.
//!
//! # Example
//!
//! ```
//! use u_mokp::knapsack::{ItemCatalog, KnapsackConfig, KnapsackProblem};
//! use u_mokp::moea::{EngineConfig, Individual};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let catalog = ItemCatalog::random(20, &mut StdRng::seed_from_u64(72));
//! let problem = KnapsackProblem::new(catalog, KnapsackConfig::default()).unwrap();
//! let result = problem
//!     .engine(EngineConfig::default().with_generations(10).with_seed(64))
//!     .unwrap()
//!     .run();
//!
//! for set in &result.archive {
//!     println!("{set} -> {}", set.fitness().unwrap());
//! }
//! ```

mod catalog;
mod config;
mod error;
mod evaluator;
mod individual;
pub mod operators;
mod problem;

pub use catalog::{Item, ItemCatalog, ItemId};
pub use config::KnapsackConfig;
pub use error::KnapsackError;
pub use evaluator::{
    KnapsackEvaluator, INFEASIBLE_VALUE, INFEASIBLE_WEIGHT, SENSES, VALUE, WEIGHT,
};
pub use individual::ItemSet;
pub use operators::{AddRemoveMutation, RandomSetInitializer, SetCrossover};
pub use problem::{KnapsackEngine, KnapsackProblem};
