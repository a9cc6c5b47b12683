//! Dominance-preserving archives.
//!
//! An archive tracks the best trade-off solutions seen across generations.
//! Every archive admits a candidate only if no member dominates it and no
//! member has identical objectives, and evicts the members the candidate
//! dominates. Bounded archives additionally keep `size() <= max_size` by
//! pruning one member at a time.
//!
//! # Archives
//!
//! - [`NonDominatedArchive`]: unbounded
//! - [`BoundedArchive`]: density or hypervolume pruning ([`PruningPolicy`])
//! - [`AdaptiveGridArchive`]: PAES grid-crowding admission and eviction
//! - [`ReferencePointArchive`]: preference-articulated, shareable across
//!   threads, with probabilistic admission of dominated candidates
//!
//! # References
//!
//! - Knowles & Corne (2000), "Approximating the Nondominated Front Using the
//!   Pareto Archived Evolution Strategy"
//! - Nebro et al. (2009), "SMPSO: A new PSO-based metaheuristic for
//!   multi-objective optimization"

mod bounded;
mod config;
mod grid;
mod non_dominated;
mod reference_point;

pub use bounded::BoundedArchive;
pub use config::{ArchiveConfig, GridArchiveConfig, PruningPolicy, ReferencePointArchiveConfig};
pub use grid::AdaptiveGridArchive;
pub use non_dominated::NonDominatedArchive;
pub use reference_point::ReferencePointArchive;

use crate::error::Result;

/// A collection of mutually non-dominated solutions.
pub trait Archive<S> {
    /// Offers `solution` to the archive. Returns whether it was admitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate's objective count differs from the
    /// members', or if pruning cannot be computed.
    fn add(&mut self, solution: S) -> Result<bool>;

    /// Current members.
    fn solutions(&self) -> &[S];

    /// Capacity, `None` for unbounded archives.
    fn max_size(&self) -> Option<usize>;

    /// Number of members.
    fn size(&self) -> usize {
        self.solutions().len()
    }

    /// Whether the archive holds no member.
    fn is_empty(&self) -> bool {
        self.solutions().is_empty()
    }

    /// Member at `index`.
    fn get(&self, index: usize) -> Option<&S> {
        self.solutions().get(index)
    }

    /// Offers every solution in turn. Returns how many were admitted.
    fn join<I>(&mut self, solutions: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        Self: Sized,
    {
        let mut admitted = 0;
        for s in solutions {
            if self.add(s)? {
                admitted += 1;
            }
        }
        Ok(admitted)
    }
}
