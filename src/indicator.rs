//! Quality indicators comparing a candidate front against a reference front.
//!
//! # Indicators
//!
//! - [`AdditiveEpsilon`]: the smallest uniform shift making the candidate
//!   front weakly dominate every reference point
//!
//! # References
//!
//! - Zitzler et al. (2003), "Performance Assessment of Multiobjective
//!   Optimizers: An Analysis and Review", IEEE TEC 7(2), 117-132

use crate::dominance::Direction;
use crate::error::{ensure_dimension, ensure_finite, FrontRole, MoError, MoResult};
use crate::extract::{FitnessExtractor, Identity};
use tracing::trace;

/// A scalar measure of how well a candidate front approximates a reference.
pub trait QualityIndicator {
    /// Short identifier for reports.
    fn name(&self) -> &'static str;

    /// Evaluates `candidate` against `reference`.
    fn evaluate<T, E>(&self, candidate: &[T], reference: &[T], extractor: &E) -> MoResult<f64>
    where
        E: FitnessExtractor<T>;
}

/// Additive epsilon indicator.
///
/// Under minimization:
///
/// ```text
/// ε = max_{r ∈ R} min_{c ∈ C} max_k (c_k − r_k)
/// ```
///
/// The value is not floored at zero: a negative ε means the candidate front
/// beats the reference everywhere by that margin.
///
/// # Example
///
/// ```
/// use u_moeval::extract::Identity;
/// use u_moeval::indicator::{AdditiveEpsilon, QualityIndicator};
///
/// let reference = vec![vec![1.0, 5.0], vec![5.0, 1.0]];
/// let candidate = vec![vec![1.0, 1.0]];
///
/// let eps = AdditiveEpsilon::default()
///     .evaluate(&candidate, &reference, &Identity)
///     .unwrap();
/// assert_eq!(eps, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditiveEpsilon {
    /// Optimization direction of the objectives.
    pub direction: Direction,
}

impl AdditiveEpsilon {
    /// Indicator for the given direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Shift `c` needs to weakly dominate `r` on its own.
    #[inline]
    fn shift(&self, c: &[f64], r: &[f64]) -> f64 {
        c.iter()
            .zip(r.iter())
            .map(|(&ck, &rk)| match self.direction {
                Direction::Minimize => ck - rk,
                Direction::Maximize => rk - ck,
            })
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The best single-candidate shift for each reference point, in
    /// reference order. [`evaluate`](QualityIndicator::evaluate) is the
    /// maximum of these values.
    ///
    /// # Errors
    ///
    /// [`MoError::EmptyFront`] if either front is empty (candidate checked
    /// first), [`MoError::DimensionMismatch`] if any vector differs in
    /// dimension from the first reference point, [`MoError::NonFinite`] if
    /// any component is NaN or infinite.
    pub fn per_reference<T, E>(
        &self,
        candidate: &[T],
        reference: &[T],
        extractor: &E,
    ) -> MoResult<Vec<f64>>
    where
        E: FitnessExtractor<T>,
    {
        if candidate.is_empty() {
            return Err(MoError::EmptyFront(FrontRole::Candidate));
        }
        if reference.is_empty() {
            return Err(MoError::EmptyFront(FrontRole::Reference));
        }

        let reference: Vec<&[f64]> = reference.iter().map(|r| extractor.extract(r)).collect();
        let candidate: Vec<&[f64]> = candidate.iter().map(|c| extractor.extract(c)).collect();

        let m = reference[0].len();
        if m == 0 {
            return Err(MoError::EmptyVector);
        }
        for v in reference.iter().chain(candidate.iter()) {
            ensure_dimension(m, v.len())?;
            ensure_finite(v)?;
        }

        let best = reference
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let best_for_r = candidate
                    .iter()
                    .map(|c| self.shift(c, r))
                    .fold(f64::INFINITY, f64::min);
                trace!(reference_index = i, epsilon = best_for_r, "reference point shift");
                best_for_r
            })
            .collect();

        Ok(best)
    }
}

impl QualityIndicator for AdditiveEpsilon {
    fn name(&self) -> &'static str {
        "AdditiveEpsilon"
    }

    fn evaluate<T, E>(&self, candidate: &[T], reference: &[T], extractor: &E) -> MoResult<f64>
    where
        E: FitnessExtractor<T>,
    {
        let per_reference = self.per_reference(candidate, reference, extractor)?;
        Ok(per_reference.into_iter().fold(f64::NEG_INFINITY, f64::max))
    }
}

/// Additive epsilon indicator of raw objective vectors under minimization.
///
/// ```
/// use u_moeval::indicator::additive_epsilon;
///
/// let eps = additive_epsilon(&[vec![2.0, 2.0]], &[vec![1.0, 1.0]]).unwrap();
/// assert_eq!(eps, 1.0);
/// ```
pub fn additive_epsilon<V: AsRef<[f64]>>(candidate: &[V], reference: &[V]) -> MoResult<f64> {
    AdditiveEpsilon::default().evaluate(candidate, reference, &Identity)
}
