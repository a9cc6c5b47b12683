//! Archive configuration.

use crate::density::DensityKind;
use crate::error::{Error, Result};
use crate::hypervolume::ReferencePoint;

/// How a full archive chooses the member to evict.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PruningPolicy {
    /// Evict the least preferred member by density.
    ///
    /// Crowding distance gives the NSGA-II style crowding archive and
    /// k-nearest-neighbour the SPEA2 style archive.
    Density(DensityKind),

    /// Evict the member with the smallest hypervolume contribution.
    Hypervolume(ReferencePoint),
}

impl Default for PruningPolicy {
    fn default() -> Self {
        PruningPolicy::Density(DensityKind::CrowdingDistance)
    }
}

impl PruningPolicy {
    fn validate(&self) -> Result<()> {
        match self {
            PruningPolicy::Density(kind) => kind.validate(),
            PruningPolicy::Hypervolume(reference) => reference.validate(),
        }
    }
}

/// Configuration for [`BoundedArchive`](super::BoundedArchive).
///
/// # Examples
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, PruningPolicy};
/// use u_pareto::density::DensityKind;
///
/// let config = ArchiveConfig::default()
///     .with_max_size(50)
///     .with_pruning(PruningPolicy::Density(DensityKind::KNearestNeighbor { k: 1 }));
/// assert!(config.validate().is_ok());
/// assert!(ArchiveConfig::default().with_max_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveConfig {
    /// Maximum number of members kept after every operation.
    pub max_size: usize,

    /// Eviction policy when the archive overflows.
    pub pruning: PruningPolicy,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            max_size: 100,
            pruning: PruningPolicy::default(),
        }
    }
}

impl ArchiveConfig {
    pub fn with_max_size(mut self, n: usize) -> Self {
        self.max_size = n;
        self
    }

    pub fn with_pruning(mut self, pruning: PruningPolicy) -> Self {
        self.pruning = pruning;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidMaxSize(self.max_size));
        }
        self.pruning.validate()
    }
}

/// Configuration for [`AdaptiveGridArchive`](super::AdaptiveGridArchive).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridArchiveConfig {
    /// Maximum number of members.
    pub max_size: usize,

    /// Bisections per objective; the grid has `2^bisections` divisions each.
    pub bisections: usize,
}

impl Default for GridArchiveConfig {
    fn default() -> Self {
        Self {
            max_size: 100,
            bisections: 5,
        }
    }
}

impl GridArchiveConfig {
    pub fn with_max_size(mut self, n: usize) -> Self {
        self.max_size = n;
        self
    }

    pub fn with_bisections(mut self, n: usize) -> Self {
        self.bisections = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidMaxSize(self.max_size));
        }
        DensityKind::Grid {
            bisections: self.bisections,
        }
        .validate()
    }
}

/// Configuration for [`ReferencePointArchive`](super::ReferencePointArchive).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferencePointArchiveConfig {
    /// Maximum number of members.
    pub max_size: usize,

    /// Aspiration point in objective space.
    pub reference_point: Vec<f64>,

    /// Chance of admitting a candidate the reference point dominates.
    pub acceptance_probability: f64,

    /// Density used to prune the archive when it overflows.
    pub density: DensityKind,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ReferencePointArchiveConfig {
    fn default() -> Self {
        Self {
            max_size: 100,
            reference_point: Vec::new(),
            acceptance_probability: 0.05,
            density: DensityKind::CrowdingDistance,
            seed: None,
        }
    }
}

impl ReferencePointArchiveConfig {
    /// Creates a configuration around `reference_point`.
    pub fn new(reference_point: Vec<f64>) -> Self {
        Self {
            reference_point,
            ..Self::default()
        }
    }

    pub fn with_max_size(mut self, n: usize) -> Self {
        self.max_size = n;
        self
    }

    pub fn with_acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = p;
        self
    }

    pub fn with_density(mut self, density: DensityKind) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidMaxSize(self.max_size));
        }
        if self.reference_point.is_empty() {
            return Err(Error::ReferencePointDimension {
                expected: 1,
                got: 0,
            });
        }
        if !(0.0..=1.0).contains(&self.acceptance_probability) {
            return Err(Error::InvalidProbability(self.acceptance_probability));
        }
        self.density.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_validate() {
        assert!(ArchiveConfig::default().validate().is_ok());
        assert!(GridArchiveConfig::default().validate().is_ok());
        assert!(ReferencePointArchiveConfig::new(vec![0.5, 0.5]).validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            ArchiveConfig::default().with_max_size(0).validate(),
            Err(Error::InvalidMaxSize(0))
        );
        assert!(GridArchiveConfig::default().with_max_size(0).validate().is_err());
    }

    #[test]
    fn test_bad_pruning_parameters() {
        let config = ArchiveConfig::default()
            .with_pruning(PruningPolicy::Density(DensityKind::KNearestNeighbor { k: 0 }));
        assert!(config.validate().is_err());
        let config = ArchiveConfig::default()
            .with_pruning(PruningPolicy::Hypervolume(ReferencePoint::Offset(-0.5)));
        assert!(config.validate().is_err());
        assert!(GridArchiveConfig::default().with_bisections(0).validate().is_err());
    }

    #[test]
    fn test_reference_point_config() {
        let config = ReferencePointArchiveConfig::new(vec![1.0, 1.0]).with_seed(7);
        assert_eq!(config.acceptance_probability, 0.05);
        assert_eq!(config.seed, Some(7));
        assert!(ReferencePointArchiveConfig::default().validate().is_err());
        let config = ReferencePointArchiveConfig::new(vec![1.0]).with_acceptance_probability(1.5);
        assert_eq!(config.validate(), Err(Error::InvalidProbability(1.5)));
    }
}
