//! Pareto ranking: partition a solution set into ordered fronts.
//!
//! Three interchangeable algorithms sit behind the [`Ranking`] façade,
//! selected by [`RankingAlgorithm`]:
//!
//! - [`fast_non_dominated_sort`]: classic O(M·N²) front peeling
//! - [`merge_non_dominated_sort`]: bitset-accelerated sweep, identical ranks
//! - [`strength_ranking`]: SPEA2 raw-fitness buckets (front 0 agrees with
//!   the other two, later fronts need not be dominance layers)
//!
//! Results are index-based. `ranks[i]` and the entries of every front refer
//! to positions in the slice passed to `compute`, so callers keep full
//! ownership of their solutions.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Moreno et al. (2020), "Merge Non-Dominated Sorting Algorithm for Many-Objective Optimization"
//! - Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto Evolutionary Algorithm"

mod bitset;
mod fast;
mod merge;
mod strength;
mod types;

pub use fast::fast_non_dominated_sort;
pub use merge::merge_non_dominated_sort;
pub use strength::{strength_fitness, strength_ranking, StrengthFitness};
pub use types::{FrontPartition, Ranking, RankingAlgorithm};
