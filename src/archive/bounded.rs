//! Bounded archive with density or hypervolume pruning.

use crate::density::DensityEstimator;
use crate::dominance::DominanceComparator;
use crate::error::Result;
use crate::hypervolume::{ExactHypervolume, HypervolumeContribution, ReferencePoint};
use crate::solution::Solution;

use super::non_dominated::{admit, check_candidate};
use super::{Archive, ArchiveConfig, PruningPolicy};

/// Non-dominated archive holding at most `max_size` members.
///
/// When an admitted candidate pushes the archive over capacity,
/// [`prune`](Self::prune) evaluates the pruning policy over all members
/// (candidate included) and evicts the least preferred one. Ties evict the
/// most recently added member.
///
/// # Examples
///
/// ```
/// use u_pareto::archive::{Archive, ArchiveConfig, BoundedArchive};
///
/// let mut archive = BoundedArchive::new(ArchiveConfig::default().with_max_size(3)).unwrap();
/// for p in [[0.0, 4.0], [4.0, 0.0], [2.0, 2.0], [2.1, 1.9]] {
///     archive.add(p.to_vec()).unwrap();
/// }
///
/// assert_eq!(archive.size(), 3);
/// // One of the two crowded interior points was evicted.
/// assert!(archive.solutions().contains(&vec![0.0, 4.0]));
/// assert!(archive.solutions().contains(&vec![4.0, 0.0]));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedArchive<S> {
    config: ArchiveConfig,
    comparator: DominanceComparator,
    members: Vec<S>,
}

impl<S: Solution> BoundedArchive<S> {
    /// Creates an empty archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (e.g. `max_size == 0`).
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            comparator: DominanceComparator::new(),
            members: Vec::new(),
        })
    }

    /// Replaces the dominance comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// The archive configuration.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Evicts least preferred members until `size() <= max_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pruning measure cannot be computed for the
    /// members (e.g. a grid too fine for their objective count).
    pub fn prune(&mut self) -> Result<()> {
        while self.members.len() > self.config.max_size {
            let worst = self.worst()?;
            self.members.remove(worst);
            trace_debug!(evicted = worst, size = self.members.len(), "bounded archive pruned");
        }
        Ok(())
    }

    /// Member indices ordered by the pruning measure, most preferred first.
    ///
    /// Used to pick leaders or to report the archive by diversity.
    pub fn compute_density(&self) -> Result<Vec<usize>> {
        match &self.config.pruning {
            PruningPolicy::Density(kind) => {
                DensityEstimator::new(kind.clone())?.sort(&self.members)
            }
            PruningPolicy::Hypervolume(reference) => {
                let contributions = self.contributions(reference)?;
                let mut order: Vec<usize> = (0..self.members.len()).collect();
                order.sort_by(|&a, &b| {
                    contributions[b]
                        .partial_cmp(&contributions[a])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                Ok(order)
            }
        }
    }

    /// Consumes the archive, returning its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.members
    }

    /// Keeps only the members for which `keep` returns true.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&S) -> bool) {
        self.members.retain(keep);
    }

    fn worst(&self) -> Result<usize> {
        let last = self.members.len() - 1;
        match &self.config.pruning {
            PruningPolicy::Density(kind) => {
                let mut estimator = DensityEstimator::new(kind.clone())?;
                estimator.compute(&self.members)?;
                Ok(estimator.worst().unwrap_or(last))
            }
            PruningPolicy::Hypervolume(reference) => {
                let contributions = self.contributions(reference)?;
                let mut worst = last;
                for (i, &c) in contributions.iter().enumerate() {
                    if c <= contributions[worst] {
                        worst = i;
                    }
                }
                Ok(worst)
            }
        }
    }

    fn contributions(&self, reference: &ReferencePoint) -> Result<Vec<f64>> {
        let front: Vec<Vec<f64>> = self.members.iter().map(|s| s.objectives().to_vec()).collect();
        let m = front.first().map_or(0, Vec::len);
        let point = reference.resolve(&front, m)?;
        Ok(ExactHypervolume.contributions(&front, &point))
    }
}

impl<S: Solution> Archive<S> for BoundedArchive<S> {
    fn add(&mut self, solution: S) -> Result<bool> {
        check_candidate(&self.members, &solution)?;
        if admit(&mut self.members, &solution, &self.comparator).is_none() {
            return Ok(false);
        }
        self.members.push(solution);
        if self.members.len() <= self.config.max_size {
            return Ok(true);
        }
        let candidate = self.members.len() - 1;
        let worst = self.worst()?;
        self.members.remove(worst);
        trace_debug!(evicted = worst, size = self.members.len(), "bounded archive pruned");
        Ok(worst != candidate)
    }

    fn solutions(&self) -> &[S] {
        &self.members
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.config.max_size)
    }
}
