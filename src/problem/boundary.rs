//! Decision-space descriptor.

use crate::error::{ProblemError, Result};
use rand::distr::uniform::SampleUniform;
use rand::Rng;
use std::cmp::Ordering;

/// Inclusive `(min, max)` range for every decision dimension.
///
/// # Examples
///
/// ```
/// use u_problem::problem::SpaceBoundary;
///
/// let boundary = SpaceBoundary::uniform(4, 0usize, 3);
/// assert_eq!(boundary.dimension(), 4);
/// assert!(boundary.contains(&[0, 1, 2, 3]));
/// assert!(!boundary.contains(&[0, 1, 2, 4]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceBoundary<T> {
    bounds: Vec<(T, T)>,
}

impl<T: Copy + PartialOrd> SpaceBoundary<T> {
    /// Creates a boundary from explicit per-dimension ranges.
    ///
    /// # Errors
    ///
    /// [`ProblemError::InvalidBoundary`] if any range has `min > max`
    /// (or is unordered, e.g. NaN).
    pub fn new(bounds: Vec<(T, T)>) -> Result<Self> {
        let ordered = |lo: &T, hi: &T| {
            matches!(lo.partial_cmp(hi), Some(Ordering::Less | Ordering::Equal))
        };
        if let Some(dimension) = bounds.iter().position(|(lo, hi)| !ordered(lo, hi)) {
            return Err(ProblemError::InvalidBoundary { dimension });
        }
        Ok(Self { bounds })
    }

    /// Creates a boundary with the same range in every dimension.
    ///
    /// If `min > max` the two are swapped.
    pub fn uniform(dimension: usize, min: T, max: T) -> Self {
        let range = if min <= max { (min, max) } else { (max, min) };
        Self {
            bounds: vec![range; dimension],
        }
    }

    /// Number of decision dimensions.
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Per-dimension `(min, max)` pairs.
    pub fn bounds(&self) -> &[(T, T)] {
        &self.bounds
    }

    /// Whether `decision` has the right length and lies inside every range.
    pub fn contains(&self, decision: &[T]) -> bool {
        decision.len() == self.bounds.len()
            && decision
                .iter()
                .zip(&self.bounds)
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    /// Samples a point uniformly inside the boundary.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<T>
    where
        T: SampleUniform,
    {
        self.bounds
            .iter()
            .map(|&(lo, hi)| rng.random_range(lo..=hi))
            .collect()
    }
}
