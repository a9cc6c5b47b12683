//! Fast non-dominated sorting (Deb et al., 2002).

use std::cmp::Ordering;

use crate::dominance::DominanceComparator;
use crate::solution::Solution;

use super::FrontPartition;

/// Fast non-dominated sorting.
///
/// Assigns a front index to each solution based on the dominance relation
/// defined by `comparator`. All objectives are **minimized**.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, decrement the counts of what it dominates, repeat
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_pareto::dominance::DominanceComparator;
/// use u_pareto::ranking::fast_non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],  // Solution A
///     vec![3.0, 3.0],  // Solution B
///     vec![5.0, 1.0],  // Solution C
///     vec![4.0, 4.0],  // Solution D, dominated by B
/// ];
///
/// let result = fast_non_dominated_sort(&objectives, &DominanceComparator::new());
///
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn fast_non_dominated_sort<S: Solution>(
    solutions: &[S],
    comparator: &DominanceComparator,
) -> FrontPartition {
    let n = solutions.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match comparator.compare(&solutions[i], &solutions[j]) {
                Ordering::Less => {
                    // i dominates j
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Ordering::Greater => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Ordering::Equal => {}
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut rank = 0;
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            ranks[i] = rank;
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        current = next;
        rank += 1;
    }

    FrontPartition::from_ranks(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::ObjectiveVector;

    fn sort(objs: &[Vec<f64>]) -> FrontPartition {
        fast_non_dominated_sort(objs, &DominanceComparator::new())
    }

    #[test]
    fn test_single_solution() {
        let result = sort(&[vec![1.0, 2.0]]);
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_two_non_dominated() {
        let result = sort(&[vec![1.0, 3.0], vec![3.0, 1.0]]);
        assert_eq!(result.ranks, vec![0, 0]);
        assert_eq!(result.fronts.len(), 1);
    }

    #[test]
    fn test_clear_dominance() {
        let result = sort(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]);
        assert_eq!(result.ranks, vec![0, 1, 2]);
        assert_eq!(result.fronts.len(), 3);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            vec![1.0, 5.0], // front 0
            vec![3.0, 3.0], // front 0
            vec![5.0, 1.0], // front 0
            vec![4.0, 4.0], // dominated by [1]
            vec![6.0, 6.0], // dominated by [3]
        ];
        assert_eq!(sort(&objs).ranks, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_all_equal() {
        let result = sort(&[vec![2.0, 2.0], vec![2.0, 2.0], vec![2.0, 2.0]]);
        assert!(result.ranks.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_three_objectives() {
        let objs = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![5.0, 3.0, 1.0],
            vec![4.0, 4.0, 4.0], // incomparable with each of the above
        ];
        assert_eq!(sort(&objs).ranks, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_rank_is_longest_dominance_chain() {
        // 3 is dominated by 0 (rank 0) and 2 (rank 1).
        let objs = vec![
            vec![0.0, 0.0],
            vec![5.0, 0.5],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
        ];
        assert_eq!(sort(&objs).ranks, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_infeasible_ranked_behind_feasible() {
        let pop = vec![
            ObjectiveVector::new(vec![0.0, 0.0]).with_constraints(vec![-2.0]),
            ObjectiveVector::new(vec![5.0, 5.0]),
            ObjectiveVector::new(vec![1.0, 1.0]).with_constraints(vec![-1.0]),
        ];
        let result = fast_non_dominated_sort(&pop, &DominanceComparator::new());
        assert_eq!(result.ranks, vec![2, 0, 1]);
    }

    #[test]
    fn test_empty() {
        let result = sort(&[]);
        assert!(result.is_empty());
        assert!(result.ranks.is_empty());
    }
}
