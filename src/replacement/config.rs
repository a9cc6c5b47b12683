//! Replacement configuration.

use crate::density::DensityKind;
use crate::error::Result;
use crate::hypervolume::ReferencePoint;
use crate::ranking::RankingAlgorithm;

/// How the overflowing front is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemovalPolicy {
    /// Compute density once and keep the best `remaining` members.
    #[default]
    OneShot,

    /// Remove the worst member, recompute density, repeat.
    ///
    /// O(front² · density cost), but densities never go stale.
    Sequential,
}

/// Configuration for [`RankingAndDensityReplacement`](super::RankingAndDensityReplacement).
///
/// # Examples
///
/// ```
/// use u_pareto::density::DensityKind;
/// use u_pareto::ranking::RankingAlgorithm;
/// use u_pareto::replacement::{RemovalPolicy, ReplacementConfig};
///
/// let config = ReplacementConfig::spea2();
/// assert_eq!(config.ranking, RankingAlgorithm::Strength);
/// assert_eq!(config.density, DensityKind::KNearestNeighbor { k: 1 });
/// assert_eq!(config.removal, RemovalPolicy::Sequential);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplacementConfig {
    /// Ranking applied to the union of population and offspring.
    pub ranking: RankingAlgorithm,

    /// Density used to truncate the overflowing front.
    pub density: DensityKind,

    /// Truncation policy.
    pub removal: RemovalPolicy,
}

impl ReplacementConfig {
    /// NSGA-II: merge sort, crowding distance, one-shot truncation.
    pub fn nsga2() -> Self {
        Self {
            ranking: RankingAlgorithm::MergeNonDominatedSort,
            density: DensityKind::CrowdingDistance,
            removal: RemovalPolicy::OneShot,
        }
    }

    /// SPEA2 environmental selection: strength ranking and sequential
    /// nearest-neighbour truncation.
    pub fn spea2() -> Self {
        Self {
            ranking: RankingAlgorithm::Strength,
            density: DensityKind::KNearestNeighbor { k: 1 },
            removal: RemovalPolicy::Sequential,
        }
    }

    pub fn with_ranking(mut self, ranking: RankingAlgorithm) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_density(mut self, density: DensityKind) -> Self {
        self.density = density;
        self
    }

    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.density.validate()
    }
}

/// Configuration for [`HypervolumeReplacement`](super::HypervolumeReplacement).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HypervolumeReplacementConfig {
    /// Ranking applied to the union of population and offspring.
    pub ranking: RankingAlgorithm,

    /// Reference point for contributions within the overflowing front.
    pub reference: ReferencePoint,
}

impl HypervolumeReplacementConfig {
    pub fn with_ranking(mut self, ranking: RankingAlgorithm) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_reference(mut self, reference: ReferencePoint) -> Self {
        self.reference = reference;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.reference.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nsga2() {
        assert_eq!(ReplacementConfig::default(), ReplacementConfig::nsga2());
        assert!(ReplacementConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_density_rejected() {
        let config =
            ReplacementConfig::default().with_density(DensityKind::KNearestNeighbor { k: 0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hypervolume_config() {
        let config = HypervolumeReplacementConfig::default()
            .with_reference(ReferencePoint::Fixed(vec![1.0, 1.0]));
        assert!(config.validate().is_ok());
        let config = config.with_reference(ReferencePoint::Offset(f64::INFINITY));
        assert!(config.validate().is_err());
    }
}
