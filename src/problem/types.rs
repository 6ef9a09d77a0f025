//! Core trait definitions for evaluable problems.
//!
//! [`Solution`] and [`Problem`] define the contract between an external
//! search driver and the problem implementations in this crate.

use super::boundary::SpaceBoundary;
use crate::error::Result;
use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// A candidate solution handed to [`Problem::evaluate`].
///
/// The problem reads the decision and writes the objective vector. Drivers
/// with their own individual types implement this trait; [`Individual`]
/// covers the common case.
///
/// # Implementing
///
/// ```ignore
/// struct Member {
///     genes: Vec<usize>,
///     fitness: Vec<f64>,
///     crowding: f64,
/// }
///
/// impl Solution for Member {
///     type Gene = usize;
///     fn decision(&self) -> &[usize] { &self.genes }
///     fn objective(&self) -> &[f64] { &self.fitness }
///     fn objective_mut(&mut self) -> &mut Vec<f64> { &mut self.fitness }
/// }
/// ```
pub trait Solution {
    /// Element type of the decision vector.
    type Gene;

    /// Returns the decision vector.
    fn decision(&self) -> &[Self::Gene];

    /// Returns the objective vector (minimization orientation).
    fn objective(&self) -> &[f64];

    /// Returns the objective vector for writing.
    ///
    /// Problems replace its contents on every evaluation.
    fn objective_mut(&mut self) -> &mut Vec<f64>;
}

/// A decision vector paired with its objective vector.
///
/// # Examples
///
/// ```
/// use u_problem::problem::{Individual, Solution};
///
/// let individual = Individual::new(vec![1usize, 0, 3, 2]);
/// assert_eq!(individual.decision(), &[1, 0, 3, 2]);
/// assert!(individual.objective().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    /// The genotype.
    pub decision: Vec<G>,

    /// Objective values written by the last evaluation.
    pub objective: Vec<f64>,
}

impl<G> Individual<G> {
    /// Creates an unevaluated individual.
    pub fn new(decision: Vec<G>) -> Self {
        Self {
            decision,
            objective: Vec::new(),
        }
    }
}

impl<G> Solution for Individual<G> {
    type Gene = G;

    fn decision(&self) -> &[G] {
        &self.decision
    }

    fn objective(&self) -> &[f64] {
        &self.objective
    }

    fn objective_mut(&mut self) -> &mut Vec<f64> {
        &mut self.objective
    }
}

/// Defines an evaluable multi-objective problem.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync`. Drivers commonly evaluate a population
/// from several worker threads at once; implementations keep all state
/// read-only after construction and allocate any scratch space per call.
pub trait Problem: Send + Sync {
    /// Element type of decision vectors.
    type Gene: Copy + Send + Sync;

    /// Number of objectives written by [`evaluate`](Problem::evaluate).
    fn number_of_objectives(&self) -> usize;

    /// Decision-space descriptor.
    fn boundary(&self) -> &SpaceBoundary<Self::Gene>;

    /// Evaluates `solution` and writes its objective vector.
    ///
    /// Returns the number of underlying evaluations consumed, normally 1.
    /// Batched or approximate evaluators may report a different cost.
    ///
    /// # Errors
    ///
    /// Fails when the decision length differs from the problem dimension,
    /// or when a metric reports a computation fault.
    fn evaluate<S>(&self, solution: &mut S) -> Result<usize>
    where
        S: Solution<Gene = Self::Gene>;

    /// Applies the maximize-flag sign convention to `objective` in place.
    ///
    /// Used for vectors produced outside `evaluate`. Applying it twice
    /// restores the input.
    fn fix(&self, objective: &mut [f64]) -> Result<()>;

    /// Samples a decision uniformly inside [`boundary`](Problem::boundary).
    fn random_decision<R: Rng>(&self, rng: &mut R) -> Vec<Self::Gene>
    where
        Self::Gene: SampleUniform + PartialOrd,
    {
        self.boundary().sample(rng)
    }
}
