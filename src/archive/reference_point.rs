//! Preference-articulated archive shared across workers.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dominance::dominates;
use crate::error::{Error, Result};
use crate::solution::Solution;

use super::{Archive, ArchiveConfig, BoundedArchive, PruningPolicy, ReferencePointArchiveConfig};

struct State<S> {
    reference_point: Vec<f64>,
    acceptance_probability: f64,
    archive: BoundedArchive<S>,
    rng: StdRng,
}

/// Bounded archive steered by a reference (aspiration) point.
///
/// A candidate that the reference point dominates is normally rejected,
/// but is admitted with probability
/// [`acceptance_probability`](ReferencePointArchiveConfig::acceptance_probability)
/// (0.05 by default) to keep exploring around the preferred region. An
/// empty archive admits any candidate. Admitted candidates then follow the
/// usual bounded-archive rules: members they dominate are evicted and the
/// archive is pruned by density.
///
/// Every operation takes `&self` and runs under one internal lock, so the
/// archive can be shared between concurrently evaluating workers.
///
/// # References
///
/// - Nebro et al. (2009), "SMPSO: A new PSO-based metaheuristic for
///   multi-objective optimization"
///
/// # Examples
///
/// ```
/// use u_pareto::archive::{ReferencePointArchive, ReferencePointArchiveConfig};
///
/// let config = ReferencePointArchiveConfig::new(vec![0.5, 0.5])
///     .with_max_size(10)
///     .with_acceptance_probability(0.0)
///     .with_seed(1);
/// let archive = ReferencePointArchive::new(config).unwrap();
///
/// assert!(archive.add(vec![0.9, 0.9]).unwrap()); // empty archive admits
/// assert!(archive.add(vec![0.1, 0.9]).unwrap());
/// assert!(!archive.add(vec![0.8, 0.6]).unwrap()); // dominated by the reference
///
/// let purged = archive.change_reference_point(vec![0.05, 0.95]).unwrap();
/// assert_eq!(purged, 0);
/// assert_eq!(archive.size(), 1);
/// ```
pub struct ReferencePointArchive<S> {
    max_size: usize,
    state: Mutex<State<S>>,
}

impl<S: Solution> ReferencePointArchive<S> {
    /// Creates an empty archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ReferencePointArchiveConfig) -> Result<Self> {
        config.validate()?;
        let archive = BoundedArchive::new(
            ArchiveConfig::default()
                .with_max_size(config.max_size)
                .with_pruning(PruningPolicy::Density(config.density.clone())),
        )?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            max_size: config.max_size,
            state: Mutex::new(State {
                reference_point: config.reference_point,
                acceptance_probability: config.acceptance_probability,
                archive,
                rng,
            }),
        })
    }

    /// Offers `solution` to the archive. Returns whether it was admitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReferencePointDimension`] if the candidate's
    /// objective count differs from the reference point's.
    pub fn add(&self, solution: S) -> Result<bool> {
        let mut state = self.state.lock();
        let expected = state.reference_point.len();
        let got = solution.number_of_objectives();
        if expected != got {
            return Err(Error::ReferencePointDimension { expected, got });
        }

        if dominates(&state.reference_point, solution.objectives()) && !state.archive.is_empty() {
            let p = state.acceptance_probability;
            if state.rng.random::<f64>() >= p {
                return Ok(false);
            }
            trace_debug!("dominated candidate admitted for exploration");
        }
        state.archive.add(solution)
    }

    /// Evicts least preferred members until `size() <= max_size`.
    pub fn prune(&self) -> Result<()> {
        self.state.lock().archive.prune()
    }

    /// Replaces the reference point and purges every member it dominates.
    ///
    /// Returns the number of purged members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReferencePointDimension`] if the new point's length
    /// differs from the current one.
    pub fn change_reference_point(&self, reference_point: Vec<f64>) -> Result<usize> {
        let mut state = self.state.lock();
        let expected = state.reference_point.len();
        if reference_point.len() != expected {
            return Err(Error::ReferencePointDimension {
                expected,
                got: reference_point.len(),
            });
        }

        let before = state.archive.size();
        state
            .archive
            .retain(|s| !dominates(&reference_point, s.objectives()));
        state.reference_point = reference_point;
        let purged = before - state.archive.size();
        trace_info!(purged, "reference point changed");
        Ok(purged)
    }

    /// The current reference point.
    pub fn reference_point(&self) -> Vec<f64> {
        self.state.lock().reference_point.clone()
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.state.lock().archive.size()
    }

    /// Whether the archive holds no member.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Capacity.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Member indices ordered by density, most isolated first.
    pub fn compute_density(&self) -> Result<Vec<usize>> {
        self.state.lock().archive.compute_density()
    }
}

impl<S: Solution + Clone> ReferencePointArchive<S> {
    /// Snapshot of the current members.
    pub fn solutions(&self) -> Vec<S> {
        self.state.lock().archive.solutions().to_vec()
    }
}
