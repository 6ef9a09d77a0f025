//! Evaluable multi-objective problem definitions.
//!
//! Each problem maps a decision vector (genotype) to an objective vector
//! for an external search driver such as an evolutionary algorithm.
//!
//! - **Problem contract**: [`problem::Problem`] with a fixed objective
//!   count, in-place evaluation, and the maximize-flag sign convention
//!   (every stored objective is minimized).
//! - **Community detection**: [`community::CommunityProblem`] decodes a
//!   locus-based genotype into a graph partition and scores it with
//!   pluggable [`community::QualityMetric`]s such as QLi and modularity.
//!
//! # Architecture
//!
//! This crate contains no search logic. Population management, variation
//! operators, evaluation budgets and parallel dispatch belong to the
//! driver; problems are read-only after construction so the driver may
//! evaluate from any number of threads.

pub mod community;
mod error;
pub mod problem;

pub use error::{ProblemError, Result};
