//! Ranking result types and the stateful [`Ranking`] façade.

use crate::dominance::DominanceComparator;
use crate::error::{Error, Result};
use crate::solution::{check_dimensions, Solution};

use super::{fast_non_dominated_sort, merge_non_dominated_sort, strength_ranking};

/// Which algorithm partitions the set into fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingAlgorithm {
    /// Deb's fast non-dominated sort. Simple, O(M·N²).
    FastNonDominatedSort,

    /// Merge non-dominated sort with 64-bit word bitsets.
    ///
    /// Produces exactly the ranks of [`FastNonDominatedSort`](Self::FastNonDominatedSort)
    /// while doing most of its work in whole-word operations.
    #[default]
    MergeNonDominatedSort,

    /// SPEA2 strength ranking: solutions bucketed by raw fitness.
    Strength,
}

/// Result of a ranking.
///
/// `ranks[i]` is the front index of input solution `i`, and `fronts[r]`
/// lists the inputs of rank `r` in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontPartition {
    /// Front index for each input solution (0 = best).
    pub ranks: Vec<usize>,

    /// Input indices grouped by front: `fronts[0]` holds the rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

impl FrontPartition {
    /// Builds the partition from a dense rank table.
    pub fn from_ranks(ranks: Vec<usize>) -> Self {
        let count = ranks.iter().max().map_or(0, |&r| r + 1);
        let mut fronts = vec![Vec::new(); count];
        for (i, &r) in ranks.iter().enumerate() {
            fronts[r].push(i);
        }
        Self { ranks, fronts }
    }

    /// Number of fronts.
    pub fn len(&self) -> usize {
        self.fronts.len()
    }

    /// Whether no solution was ranked.
    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }
}

/// Stateful ranking: `compute` once, then query fronts.
///
/// Recomputing overwrites the previous partition.
///
/// # Examples
///
/// ```
/// use u_pareto::ranking::{Ranking, RankingAlgorithm};
///
/// let points = vec![
///     vec![1.0, 5.0],
///     vec![2.0, 4.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![3.0, 2.0],
/// ];
///
/// let mut ranking = Ranking::new(RankingAlgorithm::MergeNonDominatedSort);
/// ranking.compute(&points).unwrap();
///
/// assert_eq!(ranking.number_of_sub_fronts(), 2);
/// assert_eq!(ranking.sub_front(0).unwrap(), &[0, 1, 3, 4]);
/// assert_eq!(ranking.sub_front(1).unwrap(), &[2]);
/// assert!(ranking.sub_front(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Ranking {
    algorithm: RankingAlgorithm,
    comparator: DominanceComparator,
    partition: FrontPartition,
}

impl Default for Ranking {
    fn default() -> Self {
        Self::new(RankingAlgorithm::default())
    }
}

impl Ranking {
    /// Creates an uncomputed ranking using a constraint-aware comparator.
    pub fn new(algorithm: RankingAlgorithm) -> Self {
        Self {
            algorithm,
            comparator: DominanceComparator::new(),
            partition: FrontPartition::default(),
        }
    }

    /// Replaces the dominance comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// The configured algorithm.
    pub fn algorithm(&self) -> RankingAlgorithm {
        self.algorithm
    }

    /// Partitions `solutions` into fronts.
    ///
    /// An empty slice yields zero fronts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectiveDimensionMismatch`] if the solutions do not
    /// share one objective count.
    pub fn compute<S: Solution>(&mut self, solutions: &[S]) -> Result<&mut Self> {
        check_dimensions(solutions)?;
        self.partition = match self.algorithm {
            RankingAlgorithm::FastNonDominatedSort => {
                fast_non_dominated_sort(solutions, &self.comparator)
            }
            RankingAlgorithm::MergeNonDominatedSort => {
                merge_non_dominated_sort(solutions, &self.comparator)
            }
            RankingAlgorithm::Strength => strength_ranking(solutions, &self.comparator),
        };
        trace_debug!(
            algorithm = ?self.algorithm,
            solutions = solutions.len(),
            fronts = self.partition.len(),
            "ranking computed"
        );
        Ok(self)
    }

    /// Input indices of front `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrontIndex`] if `index >= number_of_sub_fronts()`.
    pub fn sub_front(&self, index: usize) -> Result<&[usize]> {
        self.partition
            .fronts
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidFrontIndex {
                index,
                fronts: self.partition.len(),
            })
    }

    /// Number of fronts in the last computed partition.
    pub fn number_of_sub_fronts(&self) -> usize {
        self.partition.len()
    }

    /// Rank of input solution `index`, if it was part of the last input.
    pub fn rank(&self, index: usize) -> Option<usize> {
        self.partition.ranks.get(index).copied()
    }

    /// Rank of every input solution.
    pub fn ranks(&self) -> &[usize] {
        &self.partition.ranks
    }

    /// All fronts, best first.
    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.partition.fronts
    }

    /// Consumes the ranking, returning the partition.
    pub fn into_partition(self) -> FrontPartition {
        self.partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::ObjectiveVector;

    fn four_points() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 5.0],
            vec![2.0, 4.0],
            vec![3.0, 3.0],
            vec![5.0, 1.0],
        ]
    }

    // ---- Partition construction ----

    #[test]
    fn test_from_ranks_groups_in_index_order() {
        let p = FrontPartition::from_ranks(vec![1, 0, 2, 0, 1]);
        assert_eq!(p.fronts, vec![vec![1, 3], vec![0, 4], vec![2]]);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_from_ranks_empty() {
        let p = FrontPartition::from_ranks(Vec::new());
        assert!(p.is_empty());
    }

    // ---- Façade ----

    #[test]
    fn test_mutually_non_dominated_single_front() {
        for algorithm in [
            RankingAlgorithm::FastNonDominatedSort,
            RankingAlgorithm::MergeNonDominatedSort,
            RankingAlgorithm::Strength,
        ] {
            let mut ranking = Ranking::new(algorithm);
            ranking.compute(&four_points()).unwrap();
            assert_eq!(ranking.number_of_sub_fronts(), 1, "{algorithm:?}");
            assert_eq!(ranking.sub_front(0).unwrap().len(), 4);
        }
    }

    #[test]
    fn test_fifth_point_splits_fronts() {
        let mut points = four_points();
        points.push(vec![3.0, 2.0]);
        for algorithm in [
            RankingAlgorithm::FastNonDominatedSort,
            RankingAlgorithm::MergeNonDominatedSort,
            RankingAlgorithm::Strength,
        ] {
            let mut ranking = Ranking::new(algorithm);
            ranking.compute(&points).unwrap();
            assert_eq!(ranking.number_of_sub_fronts(), 2, "{algorithm:?}");
            assert_eq!(ranking.sub_front(0).unwrap(), &[0, 1, 3, 4]);
            assert_eq!(ranking.sub_front(1).unwrap(), &[2]);
            assert_eq!(ranking.rank(2), Some(1));
        }
    }

    #[test]
    fn test_invalid_front_index() {
        let mut ranking = Ranking::default();
        assert_eq!(
            ranking.sub_front(0),
            Err(Error::InvalidFrontIndex { index: 0, fronts: 0 })
        );
        ranking.compute(&four_points()).unwrap();
        assert_eq!(
            ranking.sub_front(1),
            Err(Error::InvalidFrontIndex { index: 1, fronts: 1 })
        );
    }

    #[test]
    fn test_empty_input() {
        let mut ranking = Ranking::default();
        let empty: Vec<ObjectiveVector> = Vec::new();
        ranking.compute(&empty).unwrap();
        assert_eq!(ranking.number_of_sub_fronts(), 0);
        assert!(ranking.ranks().is_empty());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut ranking = Ranking::default();
        let bad = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            ranking.compute(&bad),
            Err(Error::ObjectiveDimensionMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_recompute_overwrites() {
        let mut ranking = Ranking::new(RankingAlgorithm::FastNonDominatedSort);
        ranking
            .compute(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]])
            .unwrap();
        assert_eq!(ranking.number_of_sub_fronts(), 3);
        ranking.compute(&four_points()).unwrap();
        assert_eq!(ranking.number_of_sub_fronts(), 1);
        assert_eq!(ranking.ranks(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_comparator_override() {
        let points = vec![
            ObjectiveVector::new(vec![1.0, 1.0]).with_constraints(vec![-1.0]),
            ObjectiveVector::new(vec![2.0, 2.0]),
        ];
        let mut aware = Ranking::new(RankingAlgorithm::MergeNonDominatedSort);
        aware.compute(&points).unwrap();
        assert_eq!(aware.ranks(), &[1, 0]);

        let mut blind = Ranking::new(RankingAlgorithm::MergeNonDominatedSort)
            .with_comparator(DominanceComparator::objectives_only());
        blind.compute(&points).unwrap();
        assert_eq!(blind.ranks(), &[0, 1]);
    }
}
