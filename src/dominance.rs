//! Pareto dominance between objective vectors.
//!
//! A vector `a` dominates `b` when it is at least as good in every objective
//! and strictly better in at least one. Ties never count as "strictly
//! better", so identical vectors are [`Dominance::Equal`], not dominating.
//!
//! Comparison is exact by default. A tolerance can be configured on
//! [`DominanceRelation`] to treat near-equal components as ties.

use crate::error::{ensure_dimension, ensure_finite, MoError, MoResult};

/// Optimization direction shared by all objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower values are better.
    #[default]
    Minimize,
    /// Higher values are better.
    Maximize,
}

/// Outcome of comparing two objective vectors `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dominance {
    /// `a` strictly dominates `b`.
    Left,
    /// `b` strictly dominates `a`.
    Right,
    /// Each vector is strictly better somewhere.
    NonDominated,
    /// All components tie.
    Equal,
}

impl Dominance {
    /// The outcome with `a` and `b` swapped.
    pub fn reverse(self) -> Self {
        match self {
            Dominance::Left => Dominance::Right,
            Dominance::Right => Dominance::Left,
            other => other,
        }
    }
}

/// Configured dominance comparator.
///
/// # Examples
///
/// ```
/// use u_moeval::dominance::{Direction, Dominance, DominanceRelation};
///
/// let min = DominanceRelation::default();
/// assert_eq!(min.compare(&[1.0, 2.0], &[2.0, 2.0]).unwrap(), Dominance::Left);
///
/// let max = DominanceRelation::default().with_direction(Direction::Maximize);
/// assert_eq!(max.compare(&[1.0, 2.0], &[2.0, 2.0]).unwrap(), Dominance::Right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominanceRelation {
    /// Whether objectives are minimized or maximized.
    pub direction: Direction,

    /// Components differing by at most this much are treated as equal.
    ///
    /// `0.0` (the default) means exact comparison.
    pub tolerance: f64,
}

impl Default for DominanceRelation {
    fn default() -> Self {
        Self {
            direction: Direction::Minimize,
            tolerance: 0.0,
        }
    }
}

impl DominanceRelation {
    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the tie tolerance. Negative values are clamped to zero.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err("tolerance must be finite and non-negative".into());
        }
        Ok(())
    }

    /// Compares `a` against `b` in a single pass over the components.
    ///
    /// # Errors
    ///
    /// [`MoError::DimensionMismatch`] if the lengths differ,
    /// [`MoError::EmptyVector`] if both are empty,
    /// [`MoError::NonFinite`] if any component is NaN or infinite.
    pub fn compare(&self, a: &[f64], b: &[f64]) -> MoResult<Dominance> {
        ensure_dimension(a.len(), b.len())?;
        if a.is_empty() {
            return Err(MoError::EmptyVector);
        }
        ensure_finite(a)?;
        ensure_finite(b)?;
        Ok(self.compare_unchecked(a, b))
    }

    /// Comparison without the dimension and finiteness checks. Callers must
    /// guarantee `a.len() == b.len()` and finite components.
    pub(crate) fn compare_unchecked(&self, a: &[f64], b: &[f64]) -> Dominance {
        let mut a_better_in_some = false;
        let mut b_better_in_some = false;

        for (&va, &vb) in a.iter().zip(b.iter()) {
            if self.tolerance > 0.0 && (va - vb).abs() <= self.tolerance {
                continue;
            }
            let (lo, hi) = match self.direction {
                Direction::Minimize => (va, vb),
                Direction::Maximize => (vb, va),
            };
            if lo < hi {
                a_better_in_some = true;
            } else if hi < lo {
                b_better_in_some = true;
            }
        }

        match (a_better_in_some, b_better_in_some) {
            (true, false) => Dominance::Left,
            (false, true) => Dominance::Right,
            (false, false) => Dominance::Equal,
            (true, true) => Dominance::NonDominated,
        }
    }

    /// True if `a` strictly dominates `b`.
    pub fn dominates(&self, a: &[f64], b: &[f64]) -> MoResult<bool> {
        Ok(self.compare(a, b)? == Dominance::Left)
    }

    /// True if `a` dominates or equals `b`.
    pub fn weakly_dominates(&self, a: &[f64], b: &[f64]) -> MoResult<bool> {
        Ok(matches!(
            self.compare(a, b)?,
            Dominance::Left | Dominance::Equal
        ))
    }
}

/// Compares `a` and `b` under minimization with exact comparison.
///
/// ```
/// use u_moeval::dominance::{dominance, Dominance};
///
/// assert_eq!(dominance(&[1.0, 2.0], &[2.0, 1.0]).unwrap(), Dominance::NonDominated);
/// assert_eq!(dominance(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), Dominance::Equal);
/// assert!(dominance(&[1.0, 1.0], &[1.0, 1.0, 1.0]).is_err());
/// ```
pub fn dominance(a: &[f64], b: &[f64]) -> MoResult<Dominance> {
    DominanceRelation::default().compare(a, b)
}
