//! Hypervolume-contribution replacement (SMS-EMOA).

use crate::error::Result;
use crate::hypervolume::{ExactHypervolume, HypervolumeContribution};
use crate::ranking::Ranking;
use crate::solution::Solution;

use super::{fill_by_fronts, HypervolumeReplacementConfig, Replacement};

/// Keeps whole fronts while they fit, then removes the smallest
/// hypervolume contributor of the overflowing front until it fits.
///
/// The reference point is resolved against the surviving members of that
/// front before every removal. Equal contributions remove the member that
/// comes last in union order.
///
/// # Examples
///
/// ```
/// use u_pareto::replacement::{HypervolumeReplacement, Replacement};
///
/// let population = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0]];
/// let offspring = vec![vec![1.9, 2.1]];
///
/// let mut replacement = HypervolumeReplacement::new(Default::default()).unwrap();
/// let next = replacement.replace(&population, &offspring).unwrap();
///
/// assert_eq!(next, population);
/// ```
#[derive(Debug, Clone)]
pub struct HypervolumeReplacement<H = ExactHypervolume> {
    config: HypervolumeReplacementConfig,
    ranking: Ranking,
    contribution: H,
}

impl HypervolumeReplacement<ExactHypervolume> {
    /// Creates the replacement with exact contributions.
    pub fn new(config: HypervolumeReplacementConfig) -> Result<Self> {
        Self::with_contribution(config, ExactHypervolume)
    }
}

impl<H: HypervolumeContribution> HypervolumeReplacement<H> {
    /// Creates the replacement with a custom contribution algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference offset is invalid.
    pub fn with_contribution(
        config: HypervolumeReplacementConfig,
        contribution: H,
    ) -> Result<Self> {
        config.validate()?;
        let ranking = Ranking::new(config.ranking);
        Ok(Self {
            config,
            ranking,
            contribution,
        })
    }

    /// The replacement configuration.
    pub fn config(&self) -> &HypervolumeReplacementConfig {
        &self.config
    }
}

impl<S, H> Replacement<S> for HypervolumeReplacement<H>
where
    S: Solution + Clone,
    H: HypervolumeContribution,
{
    fn replace(&mut self, population: &[S], offspring: &[S]) -> Result<Vec<S>> {
        let union: Vec<&S> = population.iter().chain(offspring).collect();
        let reference = &self.config.reference;
        let contribution = &self.contribution;

        let target = population.len();
        let selected = fill_by_fronts(&mut self.ranking, &union, target, |front, remaining| {
            let mut alive = front.to_vec();
            let mut points: Vec<Vec<f64>> = front
                .iter()
                .map(|&i| union[i].objectives().to_vec())
                .collect();
            let m = points.first().map_or(0, Vec::len);
            while alive.len() > remaining {
                let point = reference.resolve(&points, m)?;
                let contributions = contribution.contributions(&points, &point);
                let mut worst = alive.len() - 1;
                for (i, &c) in contributions.iter().enumerate() {
                    if c <= contributions[worst] {
                        worst = i;
                    }
                }
                alive.remove(worst);
                points.remove(worst);
            }
            Ok(alive)
        })?;

        Ok(selected.into_iter().map(|i| union[i].clone()).collect())
    }
}
