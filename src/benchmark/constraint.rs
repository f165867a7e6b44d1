//! Axis-aligned box constraints on search points.

use crate::error::{ensure_dimension, MoResult};
use rand::Rng;

/// Per-variable lower and upper bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxConstraint {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl BoxConstraint {
    /// Creates a constraint from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bound vectors differ in length, or a lower bound
    /// is not finite or exceeds its upper bound.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, String> {
        if lower.len() != upper.len() {
            return Err(format!(
                "bound lengths differ: {} lower, {} upper",
                lower.len(),
                upper.len()
            ));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(format!("bounds of variable {i} must be finite"));
            }
            if lo > hi {
                return Err(format!("lower bound {lo} exceeds upper bound {hi} for variable {i}"));
            }
        }
        Ok(Self { lower, upper })
    }

    /// The same interval `[lo, hi]` for each of `n` variables.
    pub(crate) fn uniform(n: usize, lo: f64, hi: f64) -> Self {
        Self {
            lower: vec![lo; n],
            upper: vec![hi; n],
        }
    }

    /// Number of constrained variables.
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    /// Lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// True if every component of `x` lies within its bounds.
    pub fn is_feasible(&self, x: &[f64]) -> bool {
        x.len() == self.dimensions()
            && x
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// Clamps `x` into the box.
    pub fn closest_feasible(&self, x: &[f64]) -> MoResult<Vec<f64>> {
        ensure_dimension(self.dimensions(), x.len())?;
        Ok(x.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .map(|(&v, (&lo, &hi))| v.clamp(lo, hi))
            .collect())
    }

    /// Draws a point uniformly from the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| if lo < hi { rng.random_range(lo..=hi) } else { lo })
            .collect()
    }
}
