//! Core trait definitions for the multi-objective engine.
//!
//! The engine talks to a problem only through small capability traits:
//! [`Initializer`], [`Evaluator`], [`Crossover`] and [`Mutation`]. Each is
//! injected into [`EvolutionEngine`](super::EvolutionEngine) at construction,
//! so operators can be swapped without touching the loop.

use rand::Rng;
use std::cmp::Ordering;

/// Optimization direction of one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    /// Lower values are better.
    Minimize,
    /// Higher values are better.
    Maximize,
}

impl Sense {
    /// Returns `true` if `a` is strictly better than `b` under this sense.
    #[inline]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Sense::Minimize => a < b,
            Sense::Maximize => a > b,
        }
    }

    /// Orders `a` before `b` when `a` is better.
    ///
    /// NaN compares equal to everything.
    pub fn cmp_better(self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Sense::Minimize => ord,
            Sense::Maximize => ord.reverse(),
        }
    }
}

/// Objective values of one evaluated individual.
///
/// The direction of each axis is not stored here; it is supplied by the
/// [`Evaluator`] through [`Evaluator::senses`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveVector(Vec<f64>);

impl ObjectiveVector {
    /// Wraps raw objective values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Objective values in axis order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no objectives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of objective `axis`, if present.
    pub fn get(&self, axis: usize) -> Option<f64> {
        self.0.get(axis).copied()
    }

    /// Lexicographic best-first ordering under the given senses.
    pub fn cmp_better(&self, other: &Self, senses: &[Sense]) -> Ordering {
        for ((&a, &b), &sense) in self.0.iter().zip(other.0.iter()).zip(senses) {
            match sense.cmp_better(a, b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl From<Vec<f64>> for ObjectiveVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for ObjectiveVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

/// A candidate solution in the population.
///
/// Individuals carry a cached objective vector that is either unset or
/// valid. Any change to the genotype must clear it through
/// [`invalidate_fitness`](Individual::invalidate_fitness).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct Bits {
///     genes: Vec<bool>,
///     fitness: Option<ObjectiveVector>,
/// }
///
/// impl Individual for Bits {
///     fn fitness(&self) -> Option<&ObjectiveVector> { self.fitness.as_ref() }
///     fn set_fitness(&mut self, f: ObjectiveVector) { self.fitness = Some(f); }
///     fn invalidate_fitness(&mut self) { self.fitness = None; }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// Returns the cached objective vector, or `None` if it is stale.
    fn fitness(&self) -> Option<&ObjectiveVector>;

    /// Attaches a freshly computed objective vector.
    fn set_fitness(&mut self, fitness: ObjectiveVector);

    /// Marks the cached objective vector as stale.
    fn invalidate_fitness(&mut self);

    /// Returns `true` if the cached objective vector is valid.
    fn has_valid_fitness(&self) -> bool {
        self.fitness().is_some()
    }
}

/// Creates random individuals for the initial population.
pub trait Initializer: Send + Sync {
    /// The individual type produced.
    type Individual: Individual;

    /// Creates one random individual. Its fitness is unset.
    fn create<R: Rng>(&self, rng: &mut R) -> Self::Individual;
}

/// Maps an individual to its objective vector.
///
/// Must be pure: the result depends only on the individual's genotype.
/// The engine may call it in parallel when the `parallel` feature is enabled.
pub trait Evaluator<I>: Send + Sync {
    /// Direction of each objective, in axis order.
    fn senses(&self) -> &[Sense];

    /// Computes the objective vector of `individual`.
    fn evaluate(&self, individual: &I) -> ObjectiveVector;
}

/// Recombines two individuals in place.
///
/// `(a, b)` is an ordered pair: implementations may assign different
/// results to each slot. Both fitnesses must be cleared.
pub trait Crossover<I>: Send + Sync {
    fn crossover<R: Rng>(&self, a: &mut I, b: &mut I, rng: &mut R);
}

/// Perturbs an individual in place and clears its fitness.
pub trait Mutation<I>: Send + Sync {
    fn mutate<R: Rng>(&self, individual: &mut I, rng: &mut R);
}
