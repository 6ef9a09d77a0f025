//! Generic multi-objective evaluation contract.
//!
//! Every problem in this crate implements [`Problem`]: it reports a fixed
//! number of objectives, evaluates a [`Solution`] in place, and exposes
//! the [`SpaceBoundary`] of its decision space.
//!
//! # Minimization Convention
//!
//! Objective vectors are always stored in minimization orientation. An
//! objective flagged "maximize" has its raw value negated before storage,
//! so a driver can compare every objective in ascending order.
//! [`Orientation`] owns the flags and [`Problem::fix`] re-applies the sign
//! convention to vectors produced outside [`Problem::evaluate`].
//!
//! # Key Types
//!
//! - [`Problem`]: The evaluation contract
//! - [`Solution`]: What a driver hands to `evaluate`
//! - [`Individual`]: A plain decision + objective record
//! - [`SpaceBoundary`]: Per-dimension `(min, max)` pairs
//! - [`Orientation`]: Per-objective maximize flags

mod boundary;
mod orientation;
mod types;

pub use boundary::SpaceBoundary;
pub use orientation::Orientation;
pub use types::{Individual, Problem, Solution};
