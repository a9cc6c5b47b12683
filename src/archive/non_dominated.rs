//! Unbounded non-dominated archive and the shared admission rule.

use std::cmp::Ordering;

use crate::dominance::{equal_objectives, DominanceComparator};
use crate::error::{Error, Result};
use crate::solution::Solution;

use super::Archive;

/// Applies the admission rule to `members`.
///
/// Returns `None` if `candidate` is dominated by a member or duplicates a
/// member's objectives (members untouched). Otherwise removes and returns
/// the members the candidate dominates; the caller inserts the candidate.
pub(crate) fn admit<S: Solution>(
    members: &mut Vec<S>,
    candidate: &S,
    comparator: &DominanceComparator,
) -> Option<Vec<S>> {
    let mut dominated = Vec::new();
    for (i, member) in members.iter().enumerate() {
        match comparator.compare(member, candidate) {
            Ordering::Less => return None,
            Ordering::Greater => dominated.push(i),
            Ordering::Equal => {
                if equal_objectives(member.objectives(), candidate.objectives()) {
                    return None;
                }
            }
        }
    }

    let mut evicted = Vec::with_capacity(dominated.len());
    for &i in dominated.iter().rev() {
        evicted.push(members.remove(i));
    }
    evicted.reverse();
    Some(evicted)
}

/// Fails if `candidate` does not have the members' objective count.
pub(crate) fn check_candidate<S: Solution>(members: &[S], candidate: &S) -> Result<()> {
    if let Some(first) = members.first() {
        let expected = first.number_of_objectives();
        let got = candidate.number_of_objectives();
        if expected != got {
            return Err(Error::ObjectiveDimensionMismatch {
                expected,
                got,
                index: members.len(),
            });
        }
    }
    Ok(())
}

/// Unbounded archive of mutually non-dominated solutions.
///
/// # Examples
///
/// ```
/// use u_pareto::archive::{Archive, NonDominatedArchive};
///
/// let mut archive = NonDominatedArchive::new();
/// assert!(archive.add(vec![2.0, 2.0]).unwrap());
/// assert!(archive.add(vec![1.0, 3.0]).unwrap());
/// assert!(!archive.add(vec![2.0, 2.0]).unwrap()); // duplicate
/// assert!(archive.add(vec![1.0, 1.0]).unwrap()); // dominates both
/// assert_eq!(archive.solutions(), &[vec![1.0, 1.0]]);
/// ```
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<S> {
    members: Vec<S>,
    comparator: DominanceComparator,
}

impl<S> Default for NonDominatedArchive<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NonDominatedArchive<S> {
    /// Creates an empty archive with a constraint-aware comparator.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            comparator: DominanceComparator::new(),
        }
    }

    /// Replaces the dominance comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Consumes the archive, returning its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.members
    }
}

impl<S: Solution> Archive<S> for NonDominatedArchive<S> {
    fn add(&mut self, solution: S) -> Result<bool> {
        check_candidate(&self.members, &solution)?;
        match admit(&mut self.members, &solution, &self.comparator) {
            Some(_) => {
                self.members.push(solution);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn solutions(&self) -> &[S] {
        &self.members
    }

    fn max_size(&self) -> Option<usize> {
        None
    }
}
