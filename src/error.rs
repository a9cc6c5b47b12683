//! Error types for ranking, density estimation, archives, and replacement.

/// Errors surfaced by the Pareto primitives.
///
/// Every variant is an invalid-argument condition detected at the call
/// boundary. Nothing in this crate retries or suppresses them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a front index is beyond the computed partition.
    #[error("invalid front index {index}: only {fronts} fronts were computed")]
    InvalidFrontIndex {
        /// The requested front index.
        index: usize,
        /// The number of available fronts.
        fronts: usize,
    },

    /// Returned when an archive is configured with a zero capacity.
    #[error("invalid archive size: max_size must be positive, got {0}")]
    InvalidMaxSize(usize),

    /// Returned when two lists that must be aligned have different lengths.
    #[error("size mismatch: expected {expected} solutions but got {got}")]
    SizeMismatch {
        /// The required length.
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },

    /// Returned when a solution's objective count differs from the rest.
    #[error(
        "objective dimension mismatch: expected {expected} objectives but solution {index} has {got}"
    )]
    ObjectiveDimensionMismatch {
        /// Objective count of the first solution.
        expected: usize,
        /// Objective count of the offending solution.
        got: usize,
        /// Position of the offending solution in the input.
        index: usize,
    },

    /// Returned when a reference point does not match the objective count.
    #[error("reference point has {got} coordinates but solutions have {expected} objectives")]
    ReferencePointDimension {
        /// Objective count of the solutions.
        expected: usize,
        /// Length of the reference point.
        got: usize,
    },

    /// Returned when a k-nearest-neighbor estimator is built with `k == 0`.
    #[error("invalid neighbourhood: k must be at least 1, got {0}")]
    InvalidNeighbourhood(usize),

    /// Returned when an adaptive grid cannot be built.
    #[error("invalid grid: {bisections} bisections over {objectives} objectives")]
    InvalidBisections {
        /// Bisections per objective.
        bisections: usize,
        /// Number of objectives.
        objectives: usize,
    },

    /// Returned when a probability lies outside `[0, 1]`.
    #[error("invalid probability: {0} must be in [0.0, 1.0]")]
    InvalidProbability(f64),

    /// Returned when a hypervolume reference offset is not a finite
    /// positive number.
    #[error("invalid reference offset: {0} must be finite and positive")]
    InvalidOffset(f64),
}

/// A convenience alias for `Result<T, u_pareto::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
