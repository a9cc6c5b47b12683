//! Solution capability consumed by the ranking, density, and archive code.
//!
//! Solutions are created and evaluated elsewhere. This crate only reads
//! their objective and constraint vectors through the [`Solution`] trait.
//! Everything computed about a solution (rank, density value, constraint
//! violation) is kept in side tables indexed by the solution's position in
//! the slice handed to the computation, never written back into the
//! solution itself. The same instance can therefore take part in several
//! rankings at once without aliasing.
//!
//! # Key Types
//!
//! - [`Solution`]: read access to objectives and constraints
//! - [`ObjectiveVector`]: a plain owned solution for callers without their own type

mod types;

pub use types::{check_dimensions, objective_bounds, ObjectiveVector, Solution};
