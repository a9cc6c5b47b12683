//! Exact hypervolume by recursive slicing.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dominance::dominates;

use super::HypervolumeContribution;

/// Exact contributions by leave-one-out hypervolume.
///
/// Uses a sweep in two dimensions and slicing on the last objective above
/// that. Exponential in the number of objectives, so intended for small
/// objective counts.
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::{ExactHypervolume, HypervolumeContribution};
///
/// let front = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
/// let c = ExactHypervolume.contributions(&front, &[4.0, 4.0]);
/// assert_eq!(c, vec![1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactHypervolume;

impl HypervolumeContribution for ExactHypervolume {
    fn contributions(&self, front: &[Vec<f64>], reference: &[f64]) -> Vec<f64> {
        let total = hypervolume(front, reference);
        let without = |i: usize| {
            let rest: Vec<Vec<f64>> = front
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, p)| p.clone())
                .collect();
            (total - hypervolume(&rest, reference)).max(0.0)
        };

        #[cfg(feature = "parallel")]
        let contributions = (0..front.len()).into_par_iter().map(without).collect();
        #[cfg(not(feature = "parallel"))]
        let contributions = (0..front.len()).map(without).collect();

        contributions
    }
}

/// Hypervolume of `points` with respect to `reference` (minimization).
///
/// Points that do not strictly dominate `reference` are ignored.
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::hypervolume;
///
/// let front = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
/// assert_eq!(hypervolume(&front, &[4.0, 4.0]), 6.0);
/// ```
pub fn hypervolume(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let d = reference.len();
    let filtered: Vec<Vec<f64>> = points
        .iter()
        .filter(|p| p.len() == d && p.iter().zip(reference).all(|(&pv, &rv)| pv < rv))
        .cloned()
        .collect();

    if filtered.is_empty() || d == 0 {
        return 0.0;
    }

    hv_recursive(&filtered, reference)
}

/// Recursive hypervolume via slicing on the last objective.
///
/// All points are dominated by `reference`.
fn hv_recursive(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let d = reference.len();

    if d == 1 {
        let min_val = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        return (reference[0] - min_val).max(0.0);
    }

    if points.len() == 1 {
        return points[0]
            .iter()
            .zip(reference)
            .map(|(&p, &r)| (r - p).max(0.0))
            .product();
    }

    if d == 2 {
        return hv_2d(points, reference);
    }

    let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| a[d - 1].partial_cmp(&b[d - 1]).unwrap_or(Ordering::Equal));

    let sub_ref = &reference[..d - 1];
    let mut result = 0.0;

    for i in 0..sorted.len() {
        let height = if i + 1 < sorted.len() {
            sorted[i + 1][d - 1] - sorted[i][d - 1]
        } else {
            reference[d - 1] - sorted[i][d - 1]
        };

        if height <= 0.0 {
            continue;
        }

        // Every point up to i covers this slab; project onto d-1 dimensions.
        let projected: Vec<Vec<f64>> = sorted[..=i].iter().map(|p| p[..d - 1].to_vec()).collect();
        let non_dom = non_dominated(&projected);
        if !non_dom.is_empty() {
            result += height * hv_recursive(&non_dom, sub_ref);
        }
    }

    result
}

/// Two-dimensional sweep: sort by the first objective and add the strip
/// each point adds below the best second objective seen so far.
fn hv_2d(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| {
        a[0].partial_cmp(&b[0])
            .unwrap_or(Ordering::Equal)
            .then(a[1].partial_cmp(&b[1]).unwrap_or(Ordering::Equal))
    });

    let mut area = 0.0;
    let mut best_y = reference[1];
    for p in sorted {
        if p[1] < best_y {
            area += (reference[0] - p[0]) * (best_y - p[1]);
            best_y = p[1];
        }
    }
    area
}

/// Non-dominated subset of `points`, duplicates collapsed.
fn non_dominated(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut result: Vec<Vec<f64>> = Vec::new();
    'outer: for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate() {
            if i != j && dominates(q, p) {
                continue 'outer;
            }
        }
        if !result.contains(p) {
            result.push(p.clone());
        }
    }
    result
}
