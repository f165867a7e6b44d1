//! Error types shared by the dominance, sorting and indicator modules.

use thiserror::Error;

/// Which side of an indicator computation a front belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontRole {
    /// The front being evaluated.
    Candidate,
    /// The front it is measured against.
    Reference,
}

impl std::fmt::Display for FrontRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontRole::Candidate => write!(f, "candidate"),
            FrontRole::Reference => write!(f, "reference"),
        }
    }
}

/// Precondition violations raised by the core operations.
///
/// None of these are recoverable inside the operation that raised them:
/// a sort or indicator computation that fails returns no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoError {
    /// Two objective vectors that must share a dimension do not.
    #[error("dimension mismatch: expected {expected} objectives, found {found}")]
    DimensionMismatch {
        /// Dimension established by the first vector seen.
        expected: usize,
        /// Dimension of the offending vector.
        found: usize,
    },

    /// An indicator was asked to evaluate a front with no points.
    #[error("{0} front is empty")]
    EmptyFront(FrontRole),

    /// Objective vectors must have at least one component.
    #[error("objective vectors must have at least one component")]
    EmptyVector,

    /// An objective component is NaN or infinite.
    #[error("objective component {component} is not finite")]
    NonFinite {
        /// Position of the offending component within its vector.
        component: usize,
    },

    /// Pairwise dominance formed a cycle, so some elements could not be
    /// assigned to any front. Only possible with a non-zero tolerance.
    #[error("dominance cycle: {unassigned} elements could not be ranked")]
    DominanceCycle {
        /// Number of elements left without a rank.
        unassigned: usize,
    },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for the core operations.
pub type MoResult<T> = Result<T, MoError>;

/// Checks that `found` matches `expected`.
#[inline]
pub(crate) fn ensure_dimension(expected: usize, found: usize) -> MoResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(MoError::DimensionMismatch { expected, found })
    }
}

/// Checks that every component of `v` is finite.
#[inline]
pub(crate) fn ensure_finite(v: &[f64]) -> MoResult<()> {
    match v.iter().position(|x| !x.is_finite()) {
        Some(component) => Err(MoError::NonFinite { component }),
        None => Ok(()),
    }
}
