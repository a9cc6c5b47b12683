//! Constraint-aware Pareto dominance comparator.

use std::cmp::Ordering;

use crate::solution::Solution;

/// Compares two objective vectors by Pareto dominance (minimization).
///
/// Returns `Less` if `a` dominates `b`, `Greater` if `b` dominates `a`, and
/// `Equal` when neither dominates (including identical vectors).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_pareto::dominance::pareto_compare;
///
/// assert_eq!(pareto_compare(&[1.0, 1.0], &[2.0, 2.0]), Ordering::Less);
/// assert_eq!(pareto_compare(&[1.0, 3.0], &[3.0, 1.0]), Ordering::Equal);
/// assert_eq!(pareto_compare(&[2.0, 2.0], &[2.0, 1.0]), Ordering::Greater);
/// ```
pub fn pareto_compare(a: &[f64], b: &[f64]) -> Ordering {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Ordering::Equal;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Whether `a` Pareto-dominates `b` on objectives alone.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    pareto_compare(a, b) == Ordering::Less
}

/// Whether two objective vectors are identical.
pub fn equal_objectives(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Orders solutions by feasibility, then by Pareto dominance.
///
/// `compare(a, b)` returns:
///
/// - `Less` when `a` wins (smaller violation, or dominates `b`)
/// - `Greater` when `b` wins
/// - `Equal` when neither wins
///
/// With constraint handling enabled, a solution whose overall constraint
/// violation is closer to zero wins outright. Equal violations (both
/// feasible, or both infeasible by the same amount) fall through to the
/// Pareto test.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_pareto::dominance::DominanceComparator;
/// use u_pareto::solution::ObjectiveVector;
///
/// let cmp = DominanceComparator::new();
/// let feasible = ObjectiveVector::new(vec![9.0, 9.0]);
/// let infeasible = ObjectiveVector::new(vec![1.0, 1.0]).with_constraints(vec![-0.1]);
///
/// assert_eq!(cmp.compare(&feasible, &infeasible), Ordering::Less);
/// assert_eq!(
///     DominanceComparator::objectives_only().compare(&feasible, &infeasible),
///     Ordering::Greater
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominanceComparator {
    /// Whether constraint violation is compared before objectives.
    pub constraint_handling: bool,
}

impl Default for DominanceComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl DominanceComparator {
    /// Constraint-aware comparator.
    pub fn new() -> Self {
        Self {
            constraint_handling: true,
        }
    }

    /// Comparator that ignores constraints.
    pub fn objectives_only() -> Self {
        Self {
            constraint_handling: false,
        }
    }

    /// Compares `a` against `b`.
    pub fn compare<S: Solution + ?Sized>(&self, a: &S, b: &S) -> Ordering {
        if self.constraint_handling {
            let va = a.overall_constraint_violation();
            let vb = b.overall_constraint_violation();
            if va != vb {
                // Violations are <= 0, so the larger value is the smaller breach.
                return vb.partial_cmp(&va).unwrap_or(Ordering::Equal);
            }
        }
        pareto_compare(a.objectives(), b.objectives())
    }

    /// Whether `a` beats `b` under this comparator.
    pub fn dominates<S: Solution + ?Sized>(&self, a: &S, b: &S) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::ObjectiveVector;

    fn ov(o: &[f64]) -> ObjectiveVector {
        ObjectiveVector::new(o.to_vec())
    }

    // ---- Pareto test ----

    #[test]
    fn test_strict_dominance() {
        let cmp = DominanceComparator::new();
        assert_eq!(cmp.compare(&ov(&[1.0, 2.0]), &ov(&[2.0, 3.0])), Ordering::Less);
        assert_eq!(cmp.compare(&ov(&[2.0, 3.0]), &ov(&[1.0, 2.0])), Ordering::Greater);
    }

    #[test]
    fn test_weak_dominance_counts() {
        // Equal in one objective, better in the other.
        assert!(dominates(&[3.0, 2.0], &[3.0, 3.0]));
        assert!(!dominates(&[3.0, 3.0], &[3.0, 2.0]));
    }

    #[test]
    fn test_identical_vectors_are_incomparable() {
        let cmp = DominanceComparator::new();
        assert_eq!(cmp.compare(&ov(&[2.0, 2.0]), &ov(&[2.0, 2.0])), Ordering::Equal);
        assert!(equal_objectives(&[2.0, 2.0], &[2.0, 2.0]));
        assert!(!equal_objectives(&[2.0, 2.0], &[2.0, 2.5]));
    }

    #[test]
    fn test_trade_off_is_incomparable() {
        assert_eq!(pareto_compare(&[1.0, 5.0, 3.0], &[3.0, 1.0, 5.0]), Ordering::Equal);
    }

    // ---- Constraint handling ----

    #[test]
    fn test_feasible_beats_infeasible() {
        let cmp = DominanceComparator::new();
        let feasible = ov(&[10.0, 10.0]).with_constraints(vec![0.0, 1.0]);
        let infeasible = ov(&[0.0, 0.0]).with_constraints(vec![-1.0, 1.0]);
        assert_eq!(cmp.compare(&feasible, &infeasible), Ordering::Less);
        assert_eq!(cmp.compare(&infeasible, &feasible), Ordering::Greater);
    }

    #[test]
    fn test_smaller_violation_wins() {
        let cmp = DominanceComparator::new();
        let mild = ov(&[5.0, 5.0]).with_constraints(vec![-0.5]);
        let severe = ov(&[1.0, 1.0]).with_constraints(vec![-3.0]);
        assert_eq!(cmp.compare(&mild, &severe), Ordering::Less);
    }

    #[test]
    fn test_equal_violation_falls_back_to_pareto() {
        let cmp = DominanceComparator::new();
        let a = ov(&[1.0, 1.0]).with_constraints(vec![-1.0]);
        let b = ov(&[2.0, 2.0]).with_constraints(vec![-1.0]);
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_objectives_only_ignores_constraints() {
        let cmp = DominanceComparator::objectives_only();
        let a = ov(&[1.0, 1.0]).with_constraints(vec![-5.0]);
        let b = ov(&[2.0, 2.0]);
        assert!(cmp.dominates(&a, &b));
    }
}
