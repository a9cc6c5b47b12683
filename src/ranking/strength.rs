//! SPEA2 strength ranking.

use std::cmp::Ordering;

use crate::dominance::DominanceComparator;
use crate::solution::Solution;

use super::FrontPartition;

/// Per-solution SPEA2 fitness components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthFitness {
    /// Number of solutions each solution dominates.
    pub strength: Vec<usize>,

    /// Sum of the strengths of each solution's dominators (0 = non-dominated).
    pub raw_fitness: Vec<usize>,
}

/// Computes strength and raw fitness for every solution.
pub fn strength_fitness<S: Solution>(
    solutions: &[S],
    comparator: &DominanceComparator,
) -> StrengthFitness {
    let n = solutions.len();
    let mut strength = vec![0usize; n];
    let mut dominators: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match comparator.compare(&solutions[i], &solutions[j]) {
                Ordering::Less => {
                    strength[i] += 1;
                    dominators[j].push(i);
                }
                Ordering::Greater => {
                    strength[j] += 1;
                    dominators[i].push(j);
                }
                Ordering::Equal => {}
            }
        }
    }

    let raw_fitness = dominators
        .iter()
        .map(|ds| ds.iter().map(|&d| strength[d]).sum())
        .collect();

    StrengthFitness {
        strength,
        raw_fitness,
    }
}

/// Strength ranking (Zitzler et al., 2001).
///
/// Solutions are bucketed by raw fitness in ascending order and empty
/// buckets are dropped, so ranks are dense. Rank 0 holds exactly the
/// solutions with raw fitness 0, which is the Pareto front 0 of the set.
/// Later ranks are ordered by raw fitness and need not be dominance layers.
///
/// # Example
///
/// ```
/// use u_pareto::dominance::DominanceComparator;
/// use u_pareto::ranking::strength_ranking;
///
/// let objectives = vec![
///     vec![1.0, 1.0], // dominates the other two, strength 2
///     vec![2.0, 2.0], // raw fitness 2
///     vec![3.0, 3.0], // raw fitness 2 + 1
/// ];
///
/// let result = strength_ranking(&objectives, &DominanceComparator::new());
/// assert_eq!(result.ranks, vec![0, 1, 2]);
/// ```
pub fn strength_ranking<S: Solution>(
    solutions: &[S],
    comparator: &DominanceComparator,
) -> FrontPartition {
    let fitness = strength_fitness(solutions, comparator);

    let mut levels = fitness.raw_fitness.clone();
    levels.sort_unstable();
    levels.dedup();

    let ranks = fitness
        .raw_fitness
        .iter()
        .map(|raw| levels.binary_search(raw).unwrap_or_default())
        .collect();

    FrontPartition::from_ranks(ranks)
}
