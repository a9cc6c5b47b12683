//! Domain-agnostic building blocks for multi-objective evolutionary
//! algorithms.
//!
//! The crate provides the selection core shared by NSGA-II, SPEA2,
//! SMS-EMOA and archive-based algorithms (PAES, SMPSO, reference-point
//! variants), independent of any problem encoding or variation operator:
//!
//! - **Dominance**: Pareto and constraint-aware dominance comparison.
//! - **Ranking**: partitioning a population into non-dominated fronts by
//!   fast non-dominated sorting, merge non-dominated sorting (bitset
//!   based) or SPEA2 strength fitness.
//! - **Density**: crowding distance, k-nearest-neighbour distances and an
//!   adaptive hypercube grid.
//! - **Hypervolume**: exact hypervolume and per-point contributions.
//! - **Archives**: unbounded and bounded non-dominated archives, an
//!   adaptive-grid archive and a thread-safe reference-point archive.
//! - **Replacement**: truncating population ∪ offspring by ranking and
//!   density, by hypervolume contribution, or pairwise.
//!
//! All objectives are minimized. Anything that exposes its objective
//! values (and optionally constraint values) through
//! [`Solution`](solution::Solution) can be ranked; computed ranks and
//! densities are returned in side tables indexed by input position.
//!
//! # Quick Start
//!
//! ```
//! use u_pareto::ranking::{Ranking, RankingAlgorithm};
//!
//! let population = vec![
//!     vec![1.0, 5.0],
//!     vec![2.0, 4.0],
//!     vec![3.0, 3.0],
//!     vec![3.0, 4.0],
//! ];
//!
//! let mut ranking = Ranking::new(RankingAlgorithm::MergeNonDominatedSort);
//! ranking.compute(&population).unwrap();
//!
//! assert_eq!(ranking.number_of_sub_fronts(), 2);
//! assert_eq!(ranking.sub_front(0).unwrap(), &[0, 1, 2]);
//! assert_eq!(ranking.sub_front(1).unwrap(), &[3]);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `parallel` | Computes KNN distance rows and hypervolume contributions with [`rayon`](https://docs.rs/rayon) | off |
//! | `serde` | `Serialize`/`Deserialize` for configs, strategy enums and [`ObjectiveVector`](solution::ObjectiveVector) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for ranking, truncation and archive pruning | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod archive;
pub mod density;
pub mod dominance;
mod error;
pub mod hypervolume;
pub mod ranking;
pub mod replacement;
pub mod solution;

pub use error::{Error, Result};
