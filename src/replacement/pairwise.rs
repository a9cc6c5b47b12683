//! One-to-one parent/offspring replacement (differential evolution).

use crate::dominance::DominanceComparator;
use crate::error::{Error, Result};
use crate::solution::Solution;

use super::Replacement;

/// Position `i` keeps the parent only if it dominates offspring `i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseReplacement {
    comparator: DominanceComparator,
}

impl PairwiseReplacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the constraint-aware default comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }
}

impl<S: Solution + Clone> Replacement<S> for PairwiseReplacement {
    fn replace(&mut self, population: &[S], offspring: &[S]) -> Result<Vec<S>> {
        if population.len() != offspring.len() {
            return Err(Error::SizeMismatch {
                expected: population.len(),
                got: offspring.len(),
            });
        }
        Ok(population
            .iter()
            .zip(offspring)
            .map(|(parent, child)| {
                if self.comparator.dominates(parent, child) {
                    parent.clone()
                } else {
                    child.clone()
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::ObjectiveVector;

    #[test]
    fn test_parent_kept_only_when_dominating() {
        let population = vec![vec![1.0, 1.0], vec![1.0, 3.0], vec![2.0, 2.0]];
        let offspring = vec![vec![2.0, 2.0], vec![3.0, 1.0], vec![2.0, 2.0]];
        let next = PairwiseReplacement::new()
            .replace(&population, &offspring)
            .unwrap();
        assert_eq!(next, vec![vec![1.0, 1.0], vec![3.0, 1.0], vec![2.0, 2.0]]);
    }

    #[test]
    fn test_feasible_parent_beats_infeasible_child() {
        let parent = ObjectiveVector::new(vec![5.0, 5.0]).with_constraints(vec![0.0]);
        let child = ObjectiveVector::new(vec![1.0, 1.0]).with_constraints(vec![-1.0]);
        let next = PairwiseReplacement::new()
            .replace(&[parent.clone()], &[child.clone()])
            .unwrap();
        assert_eq!(next, vec![parent.clone()]);

        let next = PairwiseReplacement::new()
            .with_comparator(DominanceComparator::objectives_only())
            .replace(&[parent], &[child.clone()])
            .unwrap();
        assert_eq!(next, vec![child]);
    }

    #[test]
    fn test_size_mismatch() {
        let population = vec![vec![1.0, 1.0]];
        let err = PairwiseReplacement::new()
            .replace(&population, &[])
            .unwrap_err();
        assert_eq!(err, Error::SizeMismatch { expected: 1, got: 0 });
    }
}
