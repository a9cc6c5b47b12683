//! Pairwise dominance between solutions.
//!
//! [`DominanceComparator`] orders two solutions first by feasibility and
//! then by Pareto dominance on their objectives. It is the single source of
//! truth for "who beats whom" used by every ranking, archive, and
//! replacement in this crate.
//!
//! # References
//!
//! - Deb (2000), "An efficient constraint handling method for genetic algorithms"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

mod comparator;

pub use comparator::{dominates, equal_objectives, pareto_compare, DominanceComparator};
