//! Density estimation within a solution set.
//!
//! Density breaks ties between solutions of the same rank: when a front
//! must be truncated, the most isolated members are kept.
//!
//! # Estimators
//!
//! - [`crowding_distance`]: NSGA-II perimeter of the neighbouring cuboid
//! - [`KnnDistances`]: SPEA2 distance to the k-th nearest neighbour, with a
//!   lexicographic tie-break over further neighbours
//! - [`AdaptiveGrid`]: PAES hyperbox occupancy
//! - [`angle_density`] and [`cosine_similarity_density`]: angular isolation
//!   around a reference point, for many-objective fronts where distances
//!   flatten out
//!
//! [`DensityEstimator`] wraps them behind one stateful interface selected
//! by [`DensityKind`].
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto Evolutionary Algorithm"
//! - Knowles & Corne (2000), "Approximating the Nondominated Front Using the
//!   Pareto Archived Evolution Strategy"
//! - Xiang et al. (2017), "A Vector Angle-Based Evolutionary Algorithm for
//!   Unconstrained Many-Objective Optimization"

mod angle;
mod crowding;
mod estimator;
mod grid;
mod knn;

pub use angle::{angle_density, cosine_similarity_density};
pub use crowding::crowding_distance;
pub use estimator::{DensityEstimator, DensityKind};
pub use grid::AdaptiveGrid;
pub use knn::KnnDistances;
