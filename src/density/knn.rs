//! k-nearest-neighbour distances (SPEA2 density).

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::solution::Solution;

/// Sorted Euclidean distance rows for a solution set.
///
/// Row `i` lists the distances from solution `i` to every solution in the
/// set (itself included, at position 0) in ascending order, so `row[k]` is
/// the distance to the k-th nearest neighbour.
///
/// When the set has `k` or fewer solutions the k-th neighbour does not
/// exist and nothing is computed: [`kth`](Self::kth) returns `None` and
/// [`compare`](Self::compare) treats every pair as equal.
///
/// # Example
///
/// ```
/// use u_pareto::density::KnnDistances;
///
/// let points = vec![
///     vec![1.0, 5.0],
///     vec![2.0, 4.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
/// let knn = KnnDistances::compute(&points, 1);
///
/// assert!((knn.kth(0).unwrap() - 2f64.sqrt()).abs() < 1e-12);
/// assert!((knn.kth(3).unwrap() - 8f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnDistances {
    k: usize,
    rows: Vec<Vec<f64>>,
}

impl KnnDistances {
    /// Builds the full distance matrix. O(N²) time and space.
    pub fn compute<S: Solution>(solutions: &[S], k: usize) -> Self {
        let n = solutions.len();
        if n <= k {
            return Self {
                k,
                rows: Vec::new(),
            };
        }

        let points: Vec<&[f64]> = solutions.iter().map(|s| s.objectives()).collect();
        let row = |i: usize| {
            let mut row: Vec<f64> = points.iter().map(|p| euclidean(points[i], p)).collect();
            row.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            row
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<f64>> = (0..n).into_par_iter().map(row).collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<f64>> = (0..n).map(row).collect();

        Self { k, rows }
    }

    /// The neighbourhood size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether distances were computed (the set was larger than `k`).
    pub fn is_computed(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Distance from solution `i` to its k-th nearest neighbour.
    pub fn kth(&self, i: usize) -> Option<f64> {
        self.rows.get(i).map(|row| row[self.k])
    }

    /// All k-th neighbour distances, empty when nothing was computed.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row[self.k]).collect()
    }

    /// Orders `i` against `j`: `Less` when `i` is more isolated.
    ///
    /// The k-th distances are compared first; exact ties fall through to
    /// the (k+1)-th, (k+2)-th, … distances.
    pub fn compare(&self, i: usize, j: usize) -> Ordering {
        let (Some(ri), Some(rj)) = (self.rows.get(i), self.rows.get(j)) else {
            return Ordering::Equal;
        };
        for (a, b) in ri[self.k..].iter().zip(&rj[self.k..]) {
            match b.partial_cmp(a) {
                Some(Ordering::Equal) | None => continue,
                Some(ord) => return ord,
            }
        }
        Ordering::Equal
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_points() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 5.0],
            vec![2.0, 4.0],
            vec![3.0, 3.0],
            vec![5.0, 1.0],
        ]
    }

    #[test]
    fn test_first_neighbour_distances() {
        let knn = KnnDistances::compute(&four_points(), 1);
        let v = knn.values();
        for d in &v[..3] {
            assert!((d - 2f64.sqrt()).abs() < 1e-12);
        }
        assert!((v[3] - 8f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_second_neighbour() {
        let knn = KnnDistances::compute(&four_points(), 2);
        // (2,4): neighbours at sqrt(2), sqrt(2), sqrt(18)
        assert!((knn.kth(1).unwrap() - 2f64.sqrt()).abs() < 1e-12);
        // (1,5): sqrt(2), sqrt(8), sqrt(32)
        assert!((knn.kth(0).unwrap() - 8f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_solutions_is_noop() {
        let knn = KnnDistances::compute(&four_points(), 4);
        assert!(!knn.is_computed());
        assert_eq!(knn.kth(0), None);
        assert!(knn.values().is_empty());
        assert_eq!(knn.compare(0, 1), Ordering::Equal);
    }

    #[test]
    fn test_isolated_point_preferred() {
        let knn = KnnDistances::compute(&four_points(), 1);
        assert_eq!(knn.compare(3, 0), Ordering::Less);
        assert_eq!(knn.compare(0, 3), Ordering::Greater);
    }

    #[test]
    fn test_tie_broken_by_next_neighbour() {
        // Rows past self: 0 = [√2, √8, √32], 1 = [√2, √2, √18], 2 = [√2, √8, √8]
        let knn = KnnDistances::compute(&four_points(), 1);
        assert_eq!(knn.compare(0, 1), Ordering::Less);
        assert_eq!(knn.compare(0, 2), Ordering::Less);
        assert_eq!(knn.compare(1, 2), Ordering::Greater);
    }

    #[test]
    fn test_identical_rows_are_equal() {
        let pts = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let knn = KnnDistances::compute(&pts, 1);
        assert_eq!(knn.compare(0, 1), Ordering::Equal);
    }
}
