//! Reference point selection for hypervolume computations.

use crate::error::{Error, Result};

/// How the hypervolume reference point is chosen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferencePoint {
    /// A fixed point in objective space.
    Fixed(Vec<f64>),

    /// The per-objective maximum of the evaluated front plus this offset.
    ///
    /// Must be positive: at zero the extreme points lie on the reference
    /// point and contribute nothing.
    Offset(f64),
}

impl Default for ReferencePoint {
    fn default() -> Self {
        ReferencePoint::Offset(1.0)
    }
}

impl ReferencePoint {
    /// Validates the offset.
    pub fn validate(&self) -> Result<()> {
        match self {
            ReferencePoint::Offset(offset) if !offset.is_finite() || *offset <= 0.0 => {
                Err(Error::InvalidOffset(*offset))
            }
            _ => Ok(()),
        }
    }

    /// Resolves the reference point for `front`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReferencePointDimension`] if a fixed point does not
    /// have `objectives` coordinates.
    pub fn resolve(&self, front: &[Vec<f64>], objectives: usize) -> Result<Vec<f64>> {
        match self {
            ReferencePoint::Fixed(point) => {
                if point.len() != objectives {
                    return Err(Error::ReferencePointDimension {
                        expected: objectives,
                        got: point.len(),
                    });
                }
                Ok(point.clone())
            }
            ReferencePoint::Offset(offset) => {
                let mut max = vec![f64::NEG_INFINITY; objectives];
                for p in front {
                    for (m, &v) in max.iter_mut().zip(p) {
                        *m = m.max(v);
                    }
                }
                Ok(max.into_iter().map(|m| m + offset).collect())
            }
        }
    }
}
