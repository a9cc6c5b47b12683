//! PAES adaptive grid archive.

use crate::density::AdaptiveGrid;
use crate::dominance::DominanceComparator;
use crate::error::Result;
use crate::solution::Solution;

use super::non_dominated::{admit, check_candidate};
use super::{Archive, GridArchiveConfig};

/// Bounded archive that uses hypercube crowding for admission.
///
/// Under capacity it behaves like a non-dominated archive. When full, a
/// non-dominated candidate is rejected if it falls into the most crowded
/// hypercube; otherwise one member of that hypercube is evicted to make
/// room.
///
/// # References
///
/// - Knowles & Corne (2000), "Approximating the Nondominated Front Using the
///   Pareto Archived Evolution Strategy"
///
/// # Examples
///
/// ```
/// use u_pareto::archive::{AdaptiveGridArchive, Archive, GridArchiveConfig};
///
/// let config = GridArchiveConfig::default().with_max_size(2).with_bisections(1);
/// let mut archive = AdaptiveGridArchive::new(config).unwrap();
///
/// assert!(archive.add(vec![0.0, 4.0]).unwrap());
/// assert!(archive.add(vec![0.5, 3.5]).unwrap());
/// // Full, and the candidate lands in an empty cube: a crowded member goes.
/// assert!(archive.add(vec![4.0, 0.0]).unwrap());
/// assert_eq!(archive.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveGridArchive<S> {
    config: GridArchiveConfig,
    comparator: DominanceComparator,
    grid: Option<AdaptiveGrid>,
    members: Vec<S>,
}

impl<S: Solution> AdaptiveGridArchive<S> {
    /// Creates an empty archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GridArchiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            comparator: DominanceComparator::new(),
            grid: None,
            members: Vec::new(),
        })
    }

    /// Replaces the dominance comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// The grid over the current members, once the first member arrived.
    pub fn grid(&self) -> Option<&AdaptiveGrid> {
        self.grid.as_ref()
    }

    /// Consumes the archive, returning its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.members
    }
}

impl<S: Solution> Archive<S> for AdaptiveGridArchive<S> {
    fn add(&mut self, solution: S) -> Result<bool> {
        check_candidate(&self.members, &solution)?;
        if self.grid.is_none() {
            let objectives = solution.number_of_objectives();
            self.grid = Some(AdaptiveGrid::new(self.config.bisections, objectives)?);
        }
        let Some(evicted) = admit(&mut self.members, &solution, &self.comparator) else {
            return Ok(false);
        };
        let Some(grid) = self.grid.as_mut() else {
            return Ok(false);
        };

        for e in &evicted {
            if let Some(location) = grid.location(e.objectives()) {
                grid.remove_solution(location);
            }
        }

        if self.members.is_empty() {
            self.members.push(solution);
            grid.update_grid(&self.members);
            return Ok(true);
        }

        grid.update_grid_with(&solution, &self.members);
        let Some(location) = grid.location(solution.objectives()) else {
            return Ok(false);
        };

        if self.members.len() >= self.config.max_size {
            let crowded = grid.most_populated();
            if crowded == Some(location) {
                return Ok(false);
            }
            let (Some(crowded), Some(victim)) = (
                crowded,
                self.members
                    .iter()
                    .position(|m| grid.location(m.objectives()) == crowded),
            ) else {
                return Ok(false);
            };
            self.members.remove(victim);
            grid.remove_solution(crowded);
            trace_debug!(evicted = victim, location = crowded, "grid archive pruned");
        }

        grid.add_solution(location);
        self.members.push(solution);
        Ok(true)
    }

    fn solutions(&self) -> &[S] {
        &self.members
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.config.max_size)
    }
}
