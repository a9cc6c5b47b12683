//! Configurable density estimator façade.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::solution::{check_dimensions, Solution};

use super::{
    angle_density, cosine_similarity_density, crowding_distance, AdaptiveGrid, KnnDistances,
};

/// Which density measure to compute.
///
/// Crowding, k-nearest-neighbour, angle and cosine densities prefer larger
/// values (more isolated). Grid occupancy prefers smaller values (emptier
/// cube).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityKind {
    /// NSGA-II crowding distance.
    #[default]
    CrowdingDistance,

    /// Distance to the k-th nearest neighbour, ties broken by the following
    /// neighbours.
    KNearestNeighbor {
        /// Neighbour rank; SPEA2 uses 1.
        k: usize,
    },

    /// Occupancy of the solution's adaptive-grid hypercube.
    Grid {
        /// Bisections per objective.
        bisections: usize,
    },

    /// Sum of the angles to the nearest neighbours in direction, seen from
    /// a reference point.
    Angle {
        /// Number of angular neighbours summed.
        neighbours: usize,
        /// Min-max scale every objective before measuring angles.
        normalize: bool,
        /// Origin of the direction vectors; `None` is the zero vector.
        reference: Option<Vec<f64>>,
    },

    /// One minus the largest cosine similarity to any other solution.
    CosineSimilarity {
        /// Min-max scale every objective before measuring angles.
        normalize: bool,
        /// Origin of the direction vectors; `None` is the zero vector.
        reference: Option<Vec<f64>>,
    },
}

impl DensityKind {
    /// Validates the estimator parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            DensityKind::KNearestNeighbor { k: 0 }
            | DensityKind::Angle { neighbours: 0, .. } => Err(Error::InvalidNeighbourhood(0)),
            DensityKind::Grid { bisections: 0 } => Err(Error::InvalidBisections {
                bisections: 0,
                objectives: 0,
            }),
            _ => Ok(()),
        }
    }
}

/// Stateful density estimator: `compute` over a set, then query by index.
///
/// # Examples
///
/// ```
/// use u_pareto::density::{DensityEstimator, DensityKind};
///
/// let front = vec![
///     vec![0.0, 4.0],
///     vec![1.0, 3.0],
///     vec![1.2, 2.8],
///     vec![4.0, 0.0],
/// ];
///
/// let mut estimator = DensityEstimator::new(DensityKind::CrowdingDistance).unwrap();
/// let order = estimator.sort(&front).unwrap();
///
/// // Boundaries first, the most crowded interior point last.
/// assert_eq!(order, vec![0, 3, 2, 1]);
/// assert_eq!(estimator.worst(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DensityEstimator {
    kind: DensityKind,
    values: Vec<f64>,
    knn: KnnDistances,
}

impl DensityEstimator {
    /// Creates an estimator with no computed values.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind's parameters are invalid.
    pub fn new(kind: DensityKind) -> Result<Self> {
        kind.validate()?;
        Ok(Self {
            kind,
            values: Vec::new(),
            knn: KnnDistances::default(),
        })
    }

    /// The configured density measure.
    pub fn kind(&self) -> &DensityKind {
        &self.kind
    }

    /// Computes the density of every solution in `solutions`.
    ///
    /// # Errors
    ///
    /// Returns an error if objective counts differ, the grid cannot be
    /// built for this many objectives, or a reference point has the wrong
    /// length.
    pub fn compute<S: Solution>(&mut self, solutions: &[S]) -> Result<()> {
        let m = check_dimensions(solutions)?;
        match &self.kind {
            DensityKind::CrowdingDistance => {
                self.values = crowding_distance(solutions);
            }
            DensityKind::KNearestNeighbor { k } => {
                self.knn = KnnDistances::compute(solutions, *k);
                self.values = self.knn.values();
            }
            DensityKind::Angle {
                neighbours,
                normalize,
                reference,
            } => {
                self.values =
                    angle_density(solutions, *neighbours, reference.as_deref(), *normalize)?;
            }
            DensityKind::CosineSimilarity {
                normalize,
                reference,
            } => {
                self.values =
                    cosine_similarity_density(solutions, reference.as_deref(), *normalize)?;
            }
            DensityKind::Grid { bisections } => {
                let mut grid = AdaptiveGrid::new(*bisections, m.max(1))?;
                grid.update_grid(solutions);
                self.values = solutions
                    .iter()
                    .map(|s| {
                        grid.location(s.objectives())
                            .map_or(0.0, |loc| grid.density(loc) as f64)
                    })
                    .collect();
            }
        }
        Ok(())
    }

    /// Density of solution `index` from the last computation.
    ///
    /// `None` if the index is out of range, or for k-nearest-neighbour when
    /// the set had `k` or fewer solutions.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// All computed densities.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Orders `i` against `j`: `Less` when `i` is preferred (kept first).
    pub fn compare(&self, i: usize, j: usize) -> Ordering {
        match self.kind {
            DensityKind::KNearestNeighbor { .. } => self.knn.compare(i, j),
            DensityKind::CrowdingDistance
            | DensityKind::Angle { .. }
            | DensityKind::CosineSimilarity { .. } => match (self.value(i), self.value(j)) {
                (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
            DensityKind::Grid { .. } => match (self.value(i), self.value(j)) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }

    /// Computes densities and returns input indices, most preferred first.
    ///
    /// Ties keep input order.
    pub fn sort<S: Solution>(&mut self, solutions: &[S]) -> Result<Vec<usize>> {
        self.compute(solutions)?;
        Ok(self.order(solutions.len()))
    }

    /// The least preferred solution of the last computation.
    ///
    /// Among equally bad solutions the one with the highest index is
    /// returned.
    pub fn worst(&self) -> Option<usize> {
        let n = match self.kind {
            DensityKind::KNearestNeighbor { .. } if !self.knn.is_computed() => return None,
            _ => self.values.len(),
        };
        self.order(n).last().copied()
    }

    fn order(&self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| self.compare(a, b));
        order
    }
}
