//! Adaptive hyperbox grid (PAES / PESA-II).

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::solution::Solution;

/// Adaptive grid over objective space.
///
/// Each objective range `[lower, upper]` is split into `2^bisections`
/// equal divisions, recomputed from the current member set. A hypercube is
/// addressed by a mixed-radix location:
///
/// ```text
/// location = Σ position[obj] · 2^(obj · bisections)
/// ```
///
/// The occupancy of a solution's hypercube is its density (lower is less
/// crowded).
///
/// # References
///
/// - Knowles & Corne (2000), "Approximating the Nondominated Front Using the
///   Pareto Archived Evolution Strategy"
///
/// # Example
///
/// ```
/// use u_pareto::density::AdaptiveGrid;
///
/// let members = vec![vec![0.0, 4.0], vec![0.5, 3.5], vec![4.0, 0.0]];
/// let mut grid = AdaptiveGrid::new(1, 2).unwrap();
/// grid.update_grid(&members);
///
/// let crowded = grid.location(&members[0]).unwrap();
/// assert_eq!(grid.location(&members[1]), Some(crowded));
/// assert_eq!(grid.density(crowded), 2);
/// assert_eq!(grid.most_populated(), Some(crowded));
/// assert_eq!(grid.location(&[5.0, 5.0]), None);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveGrid {
    bisections: usize,
    objectives: usize,
    lower: Vec<f64>,
    upper: Vec<f64>,
    division_size: Vec<f64>,
    /// Occupancy per non-empty hypercube.
    hypercubes: BTreeMap<usize, usize>,
    most_populated: Option<usize>,
}

impl AdaptiveGrid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBisections`] if `bisections` is zero or the
    /// hypercube address space does not fit in a `usize`.
    pub fn new(bisections: usize, objectives: usize) -> Result<Self> {
        let bits = bisections.checked_mul(objectives);
        if bisections == 0 || bits.is_none_or(|b| b >= usize::BITS as usize) {
            return Err(Error::InvalidBisections {
                bisections,
                objectives,
            });
        }
        Ok(Self {
            bisections,
            objectives,
            lower: vec![f64::INFINITY; objectives],
            upper: vec![f64::NEG_INFINITY; objectives],
            division_size: vec![0.0; objectives],
            hypercubes: BTreeMap::new(),
            most_populated: None,
        })
    }

    /// Bisections per objective.
    pub fn bisections(&self) -> usize {
        self.bisections
    }

    /// Rebuilds limits and occupancy from `solutions`.
    pub fn update_grid<S: Solution>(&mut self, solutions: &[S]) {
        self.update_limits(solutions);
        self.populate(solutions);
    }

    /// Updates the grid for an incoming `candidate`.
    ///
    /// If the candidate lies outside the current limits, the limits are
    /// widened to cover both `solutions` and the candidate and occupancy is
    /// rebuilt from `solutions`. The candidate itself is not counted.
    pub fn update_grid_with<S: Solution>(&mut self, candidate: &S, solutions: &[S]) {
        if self.location(candidate.objectives()).is_some() {
            return;
        }
        self.update_limits(solutions);
        for (obj, &v) in candidate.objectives().iter().enumerate().take(self.objectives) {
            self.lower[obj] = self.lower[obj].min(v);
            self.upper[obj] = self.upper[obj].max(v);
            self.division_size[obj] = self.upper[obj] - self.lower[obj];
        }
        self.populate(solutions);
    }

    /// Hypercube holding `objectives`, or `None` if it lies outside the grid.
    pub fn location(&self, objectives: &[f64]) -> Option<usize> {
        if objectives.len() != self.objectives {
            return None;
        }
        let divisions = 1usize << self.bisections;
        let mut location = 0usize;
        for (obj, &value) in objectives.iter().enumerate() {
            let lower = self.lower[obj];
            let upper = self.upper[obj];
            if !(lower..=upper).contains(&value) {
                return None;
            }
            let position = if value == lower {
                0
            } else if value == upper {
                divisions - 1
            } else {
                let mut size = self.division_size[obj];
                let mut account = lower;
                let mut ranges = divisions;
                let mut position = 0;
                for _ in 0..self.bisections {
                    size /= 2.0;
                    ranges /= 2;
                    if value > account + size {
                        position += ranges;
                        account += size;
                    }
                }
                position
            };
            location += position << (obj * self.bisections);
        }
        Some(location)
    }

    /// Number of members in hypercube `location`.
    pub fn density(&self, location: usize) -> usize {
        self.hypercubes.get(&location).copied().unwrap_or(0)
    }

    /// The hypercube with the most members (lowest location on ties).
    pub fn most_populated(&self) -> Option<usize> {
        self.most_populated
    }

    /// Number of non-empty hypercubes.
    pub fn occupied_hypercubes(&self) -> usize {
        self.hypercubes.len()
    }

    /// Average members per non-empty hypercube.
    pub fn average_occupation(&self) -> f64 {
        if self.hypercubes.is_empty() {
            return 0.0;
        }
        let total: usize = self.hypercubes.values().sum();
        total as f64 / self.hypercubes.len() as f64
    }

    /// Counts one more member in `location`.
    pub fn add_solution(&mut self, location: usize) {
        *self.hypercubes.entry(location).or_insert(0) += 1;
        self.refresh_most_populated();
    }

    /// Counts one member less in `location`.
    pub fn remove_solution(&mut self, location: usize) {
        if let Some(count) = self.hypercubes.get_mut(&location) {
            *count -= 1;
            if *count == 0 {
                self.hypercubes.remove(&location);
            }
        }
        self.refresh_most_populated();
    }

    fn update_limits<S: Solution>(&mut self, solutions: &[S]) {
        self.lower.fill(f64::INFINITY);
        self.upper.fill(f64::NEG_INFINITY);
        for s in solutions {
            for (obj, &v) in s.objectives().iter().enumerate().take(self.objectives) {
                self.lower[obj] = self.lower[obj].min(v);
                self.upper[obj] = self.upper[obj].max(v);
            }
        }
        for obj in 0..self.objectives {
            self.division_size[obj] = self.upper[obj] - self.lower[obj];
        }
    }

    fn populate<S: Solution>(&mut self, solutions: &[S]) {
        self.hypercubes.clear();
        for s in solutions {
            if let Some(location) = self.location(s.objectives()) {
                *self.hypercubes.entry(location).or_insert(0) += 1;
            }
        }
        self.refresh_most_populated();
    }

    fn refresh_most_populated(&mut self) {
        let mut best: Option<(usize, usize)> = None;
        for (&location, &count) in &self.hypercubes {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((location, count));
            }
        }
        self.most_populated = best.map(|(location, _)| location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bisections() {
        assert!(AdaptiveGrid::new(0, 2).is_err());
        assert!(AdaptiveGrid::new(40, 2).is_err());
        assert!(AdaptiveGrid::new(5, 2).is_ok());
    }

    #[test]
    fn test_location_boundaries() {
        let members = vec![vec![0.0, 0.0], vec![8.0, 8.0]];
        let mut grid = AdaptiveGrid::new(3, 2).unwrap();
        grid.update_grid(&members);

        assert_eq!(grid.location(&[0.0, 0.0]), Some(0));
        // upper limit maps to the last division in every objective
        assert_eq!(grid.location(&[8.0, 8.0]), Some(7 + (7 << 3)));
        // 8 divisions of width 1
        assert_eq!(grid.location(&[2.5, 0.0]), Some(2));
        assert_eq!(grid.location(&[0.0, 5.5]), Some(5 << 3));
        // exact division edges belong to the lower division
        assert_eq!(grid.location(&[4.0, 0.0]), Some(3));
        assert_eq!(grid.location(&[-1.0, 0.0]), None);
    }

    #[test]
    fn test_occupancy_and_most_populated() {
        let members = vec![
            vec![0.0, 4.0],
            vec![4.0, 0.0],
            vec![3.5, 0.2],
            vec![3.8, 0.1],
        ];
        let mut grid = AdaptiveGrid::new(1, 2).unwrap();
        grid.update_grid(&members);
        let corner = grid.location(&members[1]).unwrap();
        assert_eq!(grid.density(corner), 3);
        assert_eq!(grid.most_populated(), Some(corner));
        assert_eq!(grid.occupied_hypercubes(), 2);
        assert!((grid.average_occupation() - 2.0).abs() < 1e-12);

        grid.remove_solution(corner);
        grid.remove_solution(corner);
        assert_eq!(grid.density(corner), 1);
        // tie between the two cubes resolves to the lower location
        let other = grid.location(&members[0]).unwrap();
        assert_eq!(grid.most_populated(), Some(corner.min(other)));

        grid.add_solution(other);
        assert_eq!(grid.most_populated(), Some(other));
    }

    #[test]
    fn test_update_with_outside_candidate_widens_limits() {
        let members = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let mut grid = AdaptiveGrid::new(2, 2).unwrap();
        grid.update_grid(&members);
        assert_eq!(grid.location(&[2.0, 0.0]), None);

        grid.update_grid_with(&vec![2.0, 0.0], &members);
        assert!(grid.location(&[2.0, 0.0]).is_some());
        assert_eq!(grid.occupied_hypercubes(), 2);
    }

    #[test]
    fn test_flat_objective_maps_to_zero() {
        let members = vec![vec![1.0, 3.0], vec![2.0, 3.0]];
        let mut grid = AdaptiveGrid::new(2, 2).unwrap();
        grid.update_grid(&members);
        assert_eq!(grid.location(&[1.5, 3.0]), Some(1));
    }
}
