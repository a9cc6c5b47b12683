//! Crowding distance (Deb et al., 2002).

use std::cmp::Ordering;

use crate::solution::Solution;

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance for each solution, measuring how
/// spread out the solutions are in objective space. Higher distance
/// means the solution is more isolated (more diverse).
///
/// Boundary solutions (min/max for any objective) receive `f64::INFINITY`.
/// Sets of one or two solutions are all boundary.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort solutions by objective value
/// 2. Assign infinity to boundary solutions
/// 3. For interior solutions, add `(next - prev) / (max - min)`, skipping
///    objectives with `max == min`
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Panics
///
/// Panics if a set of three or more solutions holds one with fewer
/// objectives than the first. [`DensityEstimator`](super::DensityEstimator)
/// checks dimensions before calling this.
///
/// # Example
///
/// ```
/// use u_pareto::density::crowding_distance;
///
/// let objectives = vec![
///     vec![0.0, 1.0],
///     vec![1.0, 0.0],
///     vec![0.5, 0.5],
/// ];
///
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[1].is_infinite());
/// assert_eq!(distances[2], 2.0);
/// ```
pub fn crowding_distance<S: Solution>(solutions: &[S]) -> Vec<f64> {
    let n = solutions.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = solutions[0].number_of_objectives();
    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for obj_idx in 0..m {
        let value = |i: usize| solutions[i].objectives()[obj_idx];
        indices.sort_by(|&a, &b| value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = value(indices[0]);
        let max_val = value(indices[n - 1]);
        let range = max_val - min_val;

        if range > 0.0 {
            for w in indices.windows(3) {
                distances[w[1]] += (value(w[2]) - value(w[0])) / range;
            }
        }
    }

    distances
}
