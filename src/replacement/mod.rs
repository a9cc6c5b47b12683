//! Generational replacement: truncate population ∪ offspring to a fixed size.
//!
//! Every replacement returns exactly `population.len()` solutions. Ranked
//! replacements consume whole fronts of the union (population first, then
//! offspring) while they fit and truncate the first front that overflows.
//!
//! # Strategies
//!
//! - [`RankingAndDensityReplacement`]: density truncation, one-shot or
//!   sequential ([`RemovalPolicy`]); NSGA-II and SPEA2 selection
//! - [`HypervolumeReplacement`]: drops the smallest hypervolume
//!   contributors (SMS-EMOA)
//! - [`PairwiseReplacement`]: parent versus its own offspring (GDE3, DE)
//!
//! Within the output, solutions appear front by front and, inside a
//! front, in union order.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto Evolutionary Algorithm"
//! - Beume, Naujoks & Emmerich (2007), "SMS-EMOA: Multiobjective selection
//!   based on dominated hypervolume"

mod config;
mod hypervolume;
mod pairwise;
mod ranking_density;

pub use config::{HypervolumeReplacementConfig, RemovalPolicy, ReplacementConfig};
pub use hypervolume::HypervolumeReplacement;
pub use pairwise::PairwiseReplacement;
pub use ranking_density::RankingAndDensityReplacement;

use crate::error::Result;
use crate::ranking::Ranking;
use crate::solution::Solution;

/// Selects the next population from the current one and its offspring.
pub trait Replacement<S> {
    /// Returns exactly `population.len()` solutions.
    fn replace(&mut self, population: &[S], offspring: &[S]) -> Result<Vec<S>>;
}

/// Fills `target` slots front by front, handing the overflowing front to
/// `truncate(front, remaining)`, which returns the union indices to keep.
fn fill_by_fronts<S, F>(
    ranking: &mut Ranking,
    union: &[&S],
    target: usize,
    mut truncate: F,
) -> Result<Vec<usize>>
where
    S: Solution,
    F: FnMut(&[usize], usize) -> Result<Vec<usize>>,
{
    ranking.compute(union)?;
    let mut selected = Vec::with_capacity(target);
    for front in ranking.fronts() {
        let remaining = target - selected.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            selected.extend_from_slice(front);
            continue;
        }
        trace_debug!(
            selected = selected.len(),
            front_size = front.len(),
            slots = remaining,
            "truncating overflowing front"
        );
        let mut kept = truncate(front, remaining)?;
        kept.sort_unstable();
        selected.extend(kept);
        break;
    }
    Ok(selected)
}
