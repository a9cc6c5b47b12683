//! Ranking + density replacement (NSGA-II, SPEA2).

use crate::density::DensityEstimator;
use crate::error::Result;
use crate::ranking::Ranking;
use crate::solution::Solution;

use super::{fill_by_fronts, RemovalPolicy, Replacement, ReplacementConfig};

/// Keeps whole fronts while they fit and truncates the overflowing one by
/// density.
///
/// # Examples
///
/// ```
/// use u_pareto::replacement::{RankingAndDensityReplacement, Replacement, ReplacementConfig};
///
/// let population = vec![vec![1.0, 5.0], vec![2.0, 4.0], vec![5.0, 1.0]];
/// let offspring = vec![vec![3.0, 3.0], vec![2.5, 2.5]];
///
/// let mut replacement = RankingAndDensityReplacement::new(ReplacementConfig::spea2()).unwrap();
/// let next = replacement.replace(&population, &offspring).unwrap();
///
/// assert_eq!(next, vec![vec![1.0, 5.0], vec![5.0, 1.0], vec![2.5, 2.5]]);
/// ```
#[derive(Debug, Clone)]
pub struct RankingAndDensityReplacement {
    config: ReplacementConfig,
    ranking: Ranking,
    estimator: DensityEstimator,
}

impl RankingAndDensityReplacement {
    /// Creates the replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if the density parameters are invalid.
    pub fn new(config: ReplacementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ranking: Ranking::new(config.ranking),
            estimator: DensityEstimator::new(config.density.clone())?,
            config,
        })
    }

    /// The replacement configuration.
    pub fn config(&self) -> &ReplacementConfig {
        &self.config
    }

    /// Ranking of the last union, for callers that need front indices.
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }
}

impl<S: Solution + Clone> Replacement<S> for RankingAndDensityReplacement {
    fn replace(&mut self, population: &[S], offspring: &[S]) -> Result<Vec<S>> {
        let union: Vec<&S> = population.iter().chain(offspring).collect();
        let removal = self.config.removal;
        let estimator = &mut self.estimator;

        let target = population.len();
        let selected = fill_by_fronts(&mut self.ranking, &union, target, |front, remaining| {
            let members: Vec<&S> = front.iter().map(|&i| union[i]).collect();
            match removal {
                RemovalPolicy::OneShot => {
                    let order = estimator.sort(&members)?;
                    Ok(order[..remaining].iter().map(|&k| front[k]).collect())
                }
                RemovalPolicy::Sequential => {
                    let mut alive = front.to_vec();
                    let mut members = members;
                    while alive.len() > remaining {
                        estimator.compute(&members)?;
                        let worst = estimator.worst().unwrap_or(alive.len() - 1);
                        alive.remove(worst);
                        members.remove(worst);
                    }
                    Ok(alive)
                }
            }
        })?;

        Ok(selected.into_iter().map(|i| union[i].clone()).collect())
    }
}
