//! Per-objective maximize flags and the storage sign convention.

use crate::error::{ProblemError, Result};

/// Orientation of each objective.
///
/// Raw values of "maximize" objectives are negated before storage so every
/// stored objective is minimized.
///
/// # Examples
///
/// ```
/// use u_problem::problem::Orientation;
///
/// let orientation = Orientation::new(vec![true, false]);
/// assert_eq!(orientation.store(0, 2.5), -2.5);
/// assert_eq!(orientation.store(1, 2.5), 2.5);
///
/// let mut objective = vec![-2.5, 2.5];
/// orientation.fix(&mut objective).unwrap();
/// assert_eq!(objective, vec![2.5, 2.5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    maximize: Vec<bool>,
}

impl Orientation {
    /// Creates an orientation from one flag per objective.
    pub fn new(maximize: Vec<bool>) -> Self {
        Self { maximize }
    }

    /// All objectives minimized.
    pub fn minimize_all(count: usize) -> Self {
        Self::new(vec![false; count])
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.maximize.len()
    }

    /// Whether no objective is configured.
    pub fn is_empty(&self) -> bool {
        self.maximize.is_empty()
    }

    /// The maximize flags in objective order.
    pub fn flags(&self) -> &[bool] {
        &self.maximize
    }

    /// Whether objective `index` is maximized.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn is_maximize(&self, index: usize) -> bool {
        self.maximize[index]
    }

    /// Converts a raw value of objective `index` to storage orientation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn store(&self, index: usize, raw: f64) -> f64 {
        if self.maximize[index] {
            -raw
        } else {
            raw
        }
    }

    /// Flips the sign of every maximized entry of `objective`.
    ///
    /// # Errors
    ///
    /// [`ProblemError::ObjectiveLength`] if `objective.len() != self.len()`.
    pub fn fix(&self, objective: &mut [f64]) -> Result<()> {
        if objective.len() != self.maximize.len() {
            return Err(ProblemError::ObjectiveLength {
                expected: self.maximize.len(),
                found: objective.len(),
            });
        }
        for (value, &maximize) in objective.iter_mut().zip(&self.maximize) {
            if maximize {
                *value = -*value;
            }
        }
        Ok(())
    }
}
