//! Merge non-dominated sorting with word-packed dominance sets.

use std::cmp::Ordering;

use crate::dominance::{equal_objectives, DominanceComparator};
use crate::solution::Solution;

use super::bitset::BitsetManager;
use super::FrontPartition;

/// Merge non-dominated sorting.
///
/// Produces exactly the ranks of
/// [`fast_non_dominated_sort`](super::fast_non_dominated_sort) for the same
/// comparator, but replaces the O(N) adjacency scans with 64-bit word
/// operations.
///
/// # Algorithm
///
/// 1. Sort lexicographically over all objectives and fold exact duplicates
///    onto one representative (a duplicate shares its representative's rank)
/// 2. Sweep the second objective: each solution's candidate dominators are
///    the already-visited solutions that precede it lexicographically
/// 3. Sweep every further objective, intersecting each candidate set with
///    the visited set. A sweep whose order equals the previous one is
///    skipped, and a sweep that leaves no candidate anywhere ends the sort
///    with a single front
/// 4. During the last sweep every dominator of a solution has been ranked
///    already, so `rank = 1 + max(rank of dominators)` is computed by
///    scanning only the set bits, cut off by per-word rank bounds
///
/// With constraint handling enabled and at least one infeasible solution,
/// solutions are grouped by overall constraint violation (least violation
/// first). Every group is sorted on its own and offset past the ranks of
/// the groups before it, which is the ordering the comparator induces.
///
/// # Panics
///
/// May panic if a solution has fewer objectives than the first one. Call
/// [`check_dimensions`](crate::solution::check_dimensions) first, or go
/// through [`Ranking`](super::Ranking), when the input is not trusted.
///
/// # Example
///
/// ```
/// use u_pareto::dominance::DominanceComparator;
/// use u_pareto::ranking::merge_non_dominated_sort;
///
/// let objectives = vec![
///     vec![3.0, 3.0],
///     vec![1.0, 5.0],
///     vec![4.0, 4.0],
///     vec![5.0, 1.0],
/// ];
///
/// let result = merge_non_dominated_sort(&objectives, &DominanceComparator::new());
/// assert_eq!(result.ranks, vec![0, 0, 1, 0]);
/// ```
pub fn merge_non_dominated_sort<S: Solution>(
    solutions: &[S],
    comparator: &DominanceComparator,
) -> FrontPartition {
    let n = solutions.len();
    if n == 0 {
        return FrontPartition::default();
    }

    let constrained = comparator.constraint_handling
        && solutions
            .iter()
            .any(|s| s.overall_constraint_violation() != 0.0);
    if !constrained {
        let objectives: Vec<&[f64]> = solutions.iter().map(|s| s.objectives()).collect();
        return FrontPartition::from_ranks(merge_ranks(&objectives));
    }

    let violation: Vec<f64> = solutions
        .iter()
        .map(|s| s.overall_constraint_violation())
        .collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        violation[b]
            .partial_cmp(&violation[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0usize; n];
    let mut offset = 0;
    for block in order.chunk_by(|&a, &b| violation[a] == violation[b]) {
        let objectives: Vec<&[f64]> = block.iter().map(|&i| solutions[i].objectives()).collect();
        let local = merge_ranks(&objectives);
        let mut block_max = 0;
        for (&i, &r) in block.iter().zip(&local) {
            ranks[i] = offset + r;
            block_max = block_max.max(r);
        }
        offset += block_max + 1;
    }

    FrontPartition::from_ranks(ranks)
}

/// Pareto ranks of `objectives`, ignoring constraints.
fn merge_ranks(objectives: &[&[f64]]) -> Vec<usize> {
    let n = objectives.len();
    let m = objectives.first().map_or(0, |o| o.len());
    if m == 0 {
        return vec![0; n];
    }

    let mut lexicographic: Vec<usize> = (0..n).collect();
    lexicographic.sort_by(|&a, &b| lexicographic_cmp(objectives[a], objectives[b]));

    // unique[sort index] = input index of the representative
    let mut unique: Vec<usize> = Vec::with_capacity(n);
    let mut sort_index = vec![0usize; n];
    for &i in &lexicographic {
        match unique.last() {
            Some(&u) if equal_objectives(objectives[u], objectives[i]) => {}
            _ => unique.push(i),
        }
        sort_index[i] = unique.len() - 1;
    }

    let unique_ranks = if m == 1 {
        // Distinct single values: each dominates every later one.
        (0..unique.len()).collect()
    } else {
        sweep(objectives, &unique, m)
    };

    sort_index.iter().map(|&s| unique_ranks[s]).collect()
}

fn sweep(objectives: &[&[f64]], unique: &[usize], m: usize) -> Vec<usize> {
    let u = unique.len();
    let mut manager = BitsetManager::new(u);

    let mut order: Vec<usize> = (0..u).collect();
    sort_by_objective(&mut order, objectives, unique, 1);

    let mut dominance = false;
    for &s in &order {
        dominance |= manager.initialize_solution_bitset(s);
        if m == 2 {
            manager.compute_solution_ranking(s);
        }
        manager.update_incremental(s);
    }
    if !dominance {
        return vec![0; u];
    }

    for k in 2..m {
        let last = k == m - 1;
        let mut next = order.clone();
        sort_by_objective(&mut next, objectives, unique, k);

        if next == order {
            if last {
                for &s in &order {
                    manager.compute_solution_ranking(s);
                }
            }
            continue;
        }

        order = next;
        manager.clear_incremental();
        dominance = false;
        for &s in &order {
            dominance |= manager.update_solution_dominance(s);
            if last {
                manager.compute_solution_ranking(s);
            }
            manager.update_incremental(s);
        }
        if !dominance {
            return vec![0; u];
        }
    }

    (0..u).map(|s| manager.ranking(s)).collect()
}

/// Orders sort indices by objective `k`, ties by sort index.
fn sort_by_objective(order: &mut [usize], objectives: &[&[f64]], unique: &[usize], k: usize) {
    order.sort_unstable_by(|&a, &b| {
        objectives[unique[a]][k]
            .partial_cmp(&objectives[unique[b]][k])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
}

fn lexicographic_cmp(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y) {
            Some(Ordering::Equal) | None => continue,
            Some(ord) => return ord,
        }
    }
    Ordering::Equal
}
