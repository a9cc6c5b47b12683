//! Hypervolume and per-point hypervolume contributions.
//!
//! The hypervolume of a point set is the volume of objective space it
//! dominates up to a reference point. A point's contribution is the volume
//! it dominates exclusively, `hv(all) - hv(all \ {p})`, which is what
//! SMS-EMOA style truncation minimizes the loss of.
//!
//! # References
//!
//! - While et al. (2006), "A Faster Algorithm for Calculating Hypervolume"
//! - Beume, Naujoks & Emmerich (2007), "SMS-EMOA: Multiobjective selection
//!   based on dominated hypervolume"

mod exact;
mod reference;

pub use exact::{hypervolume, ExactHypervolume};
pub use reference::ReferencePoint;

/// Computes each point's exclusive hypervolume contribution.
///
/// Implement this to plug in a faster or approximate algorithm.
pub trait HypervolumeContribution {
    /// Contribution of every point in `front` with respect to `reference`.
    ///
    /// The result has one entry per point. Points that do not strictly
    /// dominate the reference point contribute zero.
    fn contributions(&self, front: &[Vec<f64>], reference: &[f64]) -> Vec<f64>;
}
