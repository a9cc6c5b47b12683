//! Angle-based density for many-objective fronts.
//!
//! Both estimators look at solutions as direction vectors from a reference
//! point (the origin unless given). A solution whose direction is far from
//! its angular neighbours is isolated and preferred. The extreme solution of
//! every objective gets `f64::INFINITY` so truncation never removes it.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::solution::{objective_bounds, Solution};

/// Below this norm a translated vector sits on the reference point.
const EPSILON: f64 = 1e-10;

/// Sum of the angles to the `neighbours` angularly nearest solutions.
///
/// Larger values are more isolated. A single solution, and the minimum and
/// maximum of every objective, get `f64::INFINITY`. With `normalize` each
/// objective is min-max scaled to `[0, 1]` over `solutions` before the
/// reference point is subtracted.
///
/// # Errors
///
/// Returns [`Error::ReferencePointDimension`] if `reference` does not have
/// one coordinate per objective.
///
/// # Example
///
/// ```
/// use u_pareto::density::angle_density;
///
/// let front = vec![
///     vec![0.0, 1.0],
///     vec![0.3, 0.7],
///     vec![0.7, 0.3],
///     vec![1.0, 0.0],
/// ];
///
/// let values = angle_density(&front, 1, None, false).unwrap();
/// assert!(values[0].is_infinite() && values[3].is_infinite());
/// assert!(values[1].is_finite());
/// ```
pub fn angle_density<S: Solution>(
    solutions: &[S],
    neighbours: usize,
    reference: Option<&[f64]>,
    normalize: bool,
) -> Result<Vec<f64>> {
    let n = solutions.len();
    if n <= 1 {
        return Ok(vec![f64::INFINITY; n]);
    }

    let vectors = directions(solutions, reference, normalize)?;
    let k = neighbours.max(1).min(n - 1);

    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let mut angles: Vec<f64> = (0..n)
                .filter(|&j| j != i)
                .map(|j| angle(&vectors[i], &vectors[j]))
                .collect();
            angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            angles[..k].iter().sum()
        })
        .collect();

    protect_extremes(solutions, &mut values);
    Ok(values)
}

/// One minus the largest cosine similarity to any other solution.
///
/// Lies in `[0, 2]`: `0` for a solution sharing its direction with another,
/// larger values for more isolated ones. Extremes and single solutions get
/// `f64::INFINITY` as in [`angle_density`].
///
/// # Errors
///
/// Returns [`Error::ReferencePointDimension`] if `reference` does not have
/// one coordinate per objective.
pub fn cosine_similarity_density<S: Solution>(
    solutions: &[S],
    reference: Option<&[f64]>,
    normalize: bool,
) -> Result<Vec<f64>> {
    let n = solutions.len();
    if n <= 1 {
        return Ok(vec![f64::INFINITY; n]);
    }

    let vectors = directions(solutions, reference, normalize)?;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let nearest = (0..n)
                .filter(|&j| j != i)
                .map(|j| cosine_similarity(&vectors[i], &vectors[j]))
                .fold(f64::NEG_INFINITY, f64::max);
            1.0 - nearest
        })
        .collect();

    protect_extremes(solutions, &mut values);
    Ok(values)
}

/// Objective vectors, optionally min-max scaled, minus the reference point.
fn directions<S: Solution>(
    solutions: &[S],
    reference: Option<&[f64]>,
    normalize: bool,
) -> Result<Vec<Vec<f64>>> {
    let m = solutions.first().map_or(0, |s| s.number_of_objectives());
    if let Some(point) = reference {
        if point.len() != m {
            return Err(Error::ReferencePointDimension {
                expected: m,
                got: point.len(),
            });
        }
    }

    let bounds = if normalize {
        objective_bounds(solutions)
    } else {
        Vec::new()
    };

    Ok(solutions
        .iter()
        .map(|s| {
            s.objectives()
                .iter()
                .enumerate()
                .map(|(k, &v)| {
                    let v = match bounds.get(k) {
                        Some(&(lo, hi)) if hi > lo => (v - lo) / (hi - lo),
                        Some(_) => 0.0,
                        None => v,
                    };
                    v - reference.map_or(0.0, |p| p[k])
                })
                .collect()
        })
        .collect())
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// A vector on the reference point has no direction and counts as
/// coinciding with everything.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (mut dot, mut na, mut nb) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    let (na, nb) = (na.sqrt(), nb.sqrt());
    if na < EPSILON || nb < EPSILON {
        return 1.0;
    }
    (dot / (na * nb)).clamp(-1.0, 1.0)
}

fn angle(a: &[f64], b: &[f64]) -> f64 {
    cosine_similarity(a, b).acos()
}

/// Marks the first minimum and the last maximum of every objective.
fn protect_extremes<S: Solution>(solutions: &[S], values: &mut [f64]) {
    let m = solutions.first().map_or(0, |s| s.number_of_objectives());
    for k in 0..m {
        let value = |i: usize| solutions[i].objectives().get(k).copied().unwrap_or(f64::NAN);
        let mut min = 0;
        let mut max = 0;
        for i in 1..solutions.len() {
            if value(i) < value(min) {
                min = i;
            }
            if value(i) >= value(max) {
                max = i;
            }
        }
        values[min] = f64::INFINITY;
        values[max] = f64::INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn quarter_circle() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0],
            vec![0.3, 0.7],
            vec![0.7, 0.3],
            vec![1.0, 0.0],
        ]
    }

    // ---- Angle ----

    #[test]
    fn test_angle_empty_and_single() {
        assert!(angle_density::<Vec<f64>>(&[], 2, None, false).unwrap().is_empty());
        let single = angle_density(&[vec![1.0, 1.0]], 2, None, false).unwrap();
        assert_eq!(single, vec![f64::INFINITY]);
    }

    #[test]
    fn test_angle_extremes_are_infinite() {
        let values = angle_density(&quarter_circle(), 2, None, false).unwrap();
        assert!(values[0].is_infinite());
        assert!(values[3].is_infinite());
        assert!(values[1].is_finite());
        assert!(values[2].is_finite());
    }

    #[test]
    fn test_angle_sums_nearest_angles() {
        // Directions at 0, 45, 90 and 10 degrees.
        let pts = vec![
            vec![1.0, 0.0],
            vec![0.5, 0.5],
            vec![0.0, 1.0],
            vec![0.5, 0.5 * 10f64.to_radians().tan()],
        ];
        let deg = |d: f64| d.to_radians();

        let values = angle_density(&pts, 1, None, false).unwrap();
        assert!(values[0].is_infinite() && values[2].is_infinite());
        assert!((values[1] - deg(35.0)).abs() < 1e-9);
        assert!((values[3] - deg(10.0)).abs() < 1e-9);

        let values = angle_density(&pts, 2, None, false).unwrap();
        assert!((values[1] - deg(80.0)).abs() < 1e-9);
        assert!((values[3] - deg(45.0)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_prefers_isolated_direction() {
        let pts = vec![
            vec![0.0, 1.0],
            vec![0.45, 0.55],
            vec![0.5, 0.5],
            vec![0.8, 0.2],
            vec![1.0, 0.0],
        ];
        let values = angle_density(&pts, 1, None, false).unwrap();
        // (0.45,0.55) and (0.5,0.5) nearly share a direction.
        assert!(values[3] > values[1]);
        assert!(values[3] > values[2]);
    }

    #[test]
    fn test_angle_reference_point_shifts_directions() {
        let pts = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
        let origin = angle_density(&pts, 1, None, false).unwrap();
        let shifted = angle_density(&pts, 1, Some(&[1.0, 1.0]), false).unwrap();
        // From (1,1) the middle point sits at 45 degrees from both axes.
        assert!((shifted[1] - FRAC_PI_4).abs() < 1e-9);
        assert!(shifted[1] > origin[1]);
    }

    #[test]
    fn test_angle_normalization_removes_scale() {
        let scaled = vec![vec![10.0, 100.0], vec![50.0, 50.0], vec![100.0, 10.0]];
        let unit = vec![vec![0.0, 1.0], vec![4.0 / 9.0, 4.0 / 9.0], vec![1.0, 0.0]];
        let a = angle_density(&scaled, 1, None, true).unwrap();
        let b = angle_density(&unit, 1, None, false).unwrap();
        assert!((a[1] - b[1]).abs() < 1e-9);
        assert!((a[1] - FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn test_angle_reference_dimension_checked() {
        assert_eq!(
            angle_density(&quarter_circle(), 1, Some(&[0.0]), false),
            Err(Error::ReferencePointDimension { expected: 2, got: 1 })
        );
    }

    #[test]
    fn test_point_on_reference_is_crowded() {
        let pts = vec![
            vec![0.0, 2.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 0.0],
        ];
        let values = angle_density(&pts, 1, Some(&[1.0, 1.0]), false).unwrap();
        assert_eq!(values[1], 0.0);
        assert_eq!(values[2], 0.0);
    }

    // ---- Cosine similarity ----

    #[test]
    fn test_cosine_empty_and_single() {
        assert!(cosine_similarity_density::<Vec<f64>>(&[], None, false).unwrap().is_empty());
        let single = cosine_similarity_density(&[vec![1.0, 1.0]], None, false).unwrap();
        assert_eq!(single, vec![f64::INFINITY]);
    }

    #[test]
    fn test_cosine_extremes_are_infinite() {
        let origin = [0.0, 0.0];
        let values = cosine_similarity_density(&quarter_circle(), Some(&origin), false).unwrap();
        assert!(values[0].is_infinite());
        assert!(values[3].is_infinite());
        assert!(values[1] >= 0.0 && values[1] < 2.0);
    }

    #[test]
    fn test_cosine_values() {
        let pts = vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![2.0, 2.0],
        ];
        let values = cosine_similarity_density(&pts, None, false).unwrap();
        // (1,1) and (2,2) share a direction.
        assert!(values[1].abs() < 1e-9);
        assert!(values[0].is_infinite());
        assert!(values[2].is_infinite());
        assert!(values[3].is_infinite());

        let pts = vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![1.0, 3.0],
            vec![0.0, 1.0],
        ];
        let values = cosine_similarity_density(&pts, None, false).unwrap();
        // (1,3) is nearer to (1,1) than either axis.
        let expected = 1.0 - 4.0 / (2f64.sqrt() * 10f64.sqrt());
        assert!((values[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_prefers_isolated_direction() {
        let pts = vec![
            vec![0.0, 1.0],
            vec![0.25, 0.75],
            vec![0.3, 0.7],
            vec![0.75, 0.25],
            vec![1.0, 0.0],
        ];
        let values = cosine_similarity_density(&pts, None, false).unwrap();
        assert!(values[3] > values[1]);
        assert!(values[3] > values[2]);
    }
}
