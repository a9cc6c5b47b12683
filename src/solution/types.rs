//! The [`Solution`] trait and a minimal owned implementation.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A candidate solution as seen by the Pareto primitives.
///
/// All objectives are **minimized**. Maximization objectives must be
/// negated by the caller before they reach this crate.
///
/// Constraint values follow the sign convention of the evaluation layer:
/// a value `>= 0` means the constraint is satisfied and a negative value
/// is a violation of that magnitude.
///
/// # Implementing
///
/// ```
/// use u_pareto::solution::Solution;
///
/// struct Design {
///     cost: [f64; 2],
///     slack: Vec<f64>,
/// }
///
/// impl Solution for Design {
///     fn objectives(&self) -> &[f64] {
///         &self.cost
///     }
///
///     fn constraints(&self) -> &[f64] {
///         &self.slack
///     }
/// }
///
/// let d = Design { cost: [1.0, 2.0], slack: vec![0.5, -0.25] };
/// assert_eq!(d.overall_constraint_violation(), -0.25);
/// assert!(!d.is_feasible());
/// ```
pub trait Solution {
    /// Objective values. The length never changes for a given solution.
    fn objectives(&self) -> &[f64];

    /// Constraint values. Negative entries are violations.
    fn constraints(&self) -> &[f64] {
        &[]
    }

    /// Number of objectives.
    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }

    /// Sum of the negative constraint values. `0.0` means feasible.
    fn overall_constraint_violation(&self) -> f64 {
        self.constraints().iter().filter(|&&c| c < 0.0).sum()
    }

    /// Number of constraints with a negative value.
    fn number_of_violated_constraints(&self) -> usize {
        self.constraints().iter().filter(|&&c| c < 0.0).count()
    }

    /// Whether no constraint is violated.
    fn is_feasible(&self) -> bool {
        self.number_of_violated_constraints() == 0
    }
}

impl<T: Solution + ?Sized> Solution for &T {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }

    fn constraints(&self) -> &[f64] {
        (**self).constraints()
    }
}

impl<T: Solution + ?Sized> Solution for Box<T> {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }

    fn constraints(&self) -> &[f64] {
        (**self).constraints()
    }
}

impl<T: Solution + ?Sized> Solution for Rc<T> {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }

    fn constraints(&self) -> &[f64] {
        (**self).constraints()
    }
}

impl<T: Solution + ?Sized> Solution for Arc<T> {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }

    fn constraints(&self) -> &[f64] {
        (**self).constraints()
    }
}

/// An owned objective vector with optional constraint values.
///
/// # Examples
///
/// ```
/// use u_pareto::solution::{ObjectiveVector, Solution};
///
/// let s = ObjectiveVector::new(vec![1.0, 5.0]);
/// assert_eq!(s.objectives(), &[1.0, 5.0]);
/// assert!(s.is_feasible());
///
/// let c = ObjectiveVector::new(vec![1.0, 5.0]).with_constraints(vec![-2.0, 1.0]);
/// assert_eq!(c.overall_constraint_violation(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveVector {
    /// Objective values (minimized).
    pub objectives: Vec<f64>,

    /// Constraint values (negative = violated).
    pub constraints: Vec<f64>,
}

impl ObjectiveVector {
    /// Creates an unconstrained solution.
    pub fn new(objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            constraints: Vec::new(),
        }
    }

    /// Attaches constraint values.
    pub fn with_constraints(mut self, constraints: Vec<f64>) -> Self {
        self.constraints = constraints;
        self
    }
}

impl From<Vec<f64>> for ObjectiveVector {
    fn from(objectives: Vec<f64>) -> Self {
        Self::new(objectives)
    }
}

impl Solution for ObjectiveVector {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn constraints(&self) -> &[f64] {
        &self.constraints
    }
}

impl Solution for Vec<f64> {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl Solution for [f64] {
    fn objectives(&self) -> &[f64] {
        self
    }
}

/// Returns the shared objective count of `solutions`.
///
/// An empty slice yields `0`.
///
/// # Errors
///
/// Returns [`Error::ObjectiveDimensionMismatch`] if any solution's objective
/// count differs from the first one.
pub fn check_dimensions<S: Solution>(solutions: &[S]) -> Result<usize> {
    let Some(first) = solutions.first() else {
        return Ok(0);
    };
    let expected = first.number_of_objectives();
    for (index, s) in solutions.iter().enumerate().skip(1) {
        let got = s.number_of_objectives();
        if got != expected {
            return Err(Error::ObjectiveDimensionMismatch {
                expected,
                got,
                index,
            });
        }
    }
    Ok(expected)
}

/// Per-objective `(min, max)` over `solutions`.
///
/// Returns an empty vector for an empty slice.
pub fn objective_bounds<S: Solution>(solutions: &[S]) -> Vec<(f64, f64)> {
    let Some(first) = solutions.first() else {
        return Vec::new();
    };
    let mut bounds: Vec<(f64, f64)> = first.objectives().iter().map(|&v| (v, v)).collect();
    for s in &solutions[1..] {
        for (b, &v) in bounds.iter_mut().zip(s.objectives()) {
            b.0 = b.0.min(v);
            b.1 = b.1.max(v);
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_sums_negative_parts() {
        let s = ObjectiveVector::new(vec![0.0]).with_constraints(vec![-1.5, 2.0, -0.5]);
        assert!((s.overall_constraint_violation() + 2.0).abs() < 1e-12);
        assert_eq!(s.number_of_violated_constraints(), 2);
        assert!(!s.is_feasible());
    }

    #[test]
    fn test_unconstrained_is_feasible() {
        let s = ObjectiveVector::new(vec![1.0, 2.0]);
        assert_eq!(s.overall_constraint_violation(), 0.0);
        assert!(s.is_feasible());
    }

    #[test]
    fn test_shared_handles_delegate() {
        let s = Arc::new(ObjectiveVector::new(vec![3.0, 4.0]).with_constraints(vec![-1.0]));
        assert_eq!(s.objectives(), &[3.0, 4.0]);
        assert_eq!(s.overall_constraint_violation(), -1.0);
        let r = &s;
        assert_eq!(r.number_of_objectives(), 2);
    }

    #[test]
    fn test_check_dimensions() {
        let ok = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(check_dimensions(&ok), Ok(2));

        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(check_dimensions(&empty), Ok(0));

        let bad = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            check_dimensions(&bad),
            Err(Error::ObjectiveDimensionMismatch {
                expected: 2,
                got: 1,
                index: 1
            })
        );
    }

    #[test]
    fn test_objective_bounds() {
        let pts = vec![vec![1.0, 5.0], vec![3.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(objective_bounds(&pts), vec![(1.0, 3.0), (2.0, 5.0)]);
    }
}
