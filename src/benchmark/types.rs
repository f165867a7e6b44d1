//! The multi-objective benchmark function contract.

use super::constraint::BoxConstraint;
use crate::error::MoResult;
use rand::Rng;

/// A real-valued multi-objective test function over a box-constrained
/// search space.
///
/// Implementations are pure producers of objective vectors: `eval` has no
/// side effects and may be called from several threads at once.
pub trait MultiObjectiveFunction: Send + Sync {
    /// Name under which the function is registered.
    fn name(&self) -> &'static str;

    /// Number of objectives produced by [`eval`](Self::eval).
    fn number_of_objectives(&self) -> usize;

    /// Whether [`set_number_of_objectives`](Self::set_number_of_objectives)
    /// has any effect.
    fn has_scalable_objectives(&self) -> bool {
        false
    }

    /// Changes the number of objectives. Ignored unless scalable.
    fn set_number_of_objectives(&mut self, _objectives: usize) {}

    /// Length of a search point.
    fn number_of_variables(&self) -> usize {
        self.constraint().dimensions()
    }

    /// Whether [`set_number_of_variables`](Self::set_number_of_variables)
    /// has any effect.
    fn has_scalable_dimensionality(&self) -> bool {
        false
    }

    /// Changes the search space dimension. Ignored unless scalable.
    fn set_number_of_variables(&mut self, _variables: usize) {}

    /// Bounds of the search space.
    fn constraint(&self) -> &BoxConstraint;

    /// Objective vector of search point `x`.
    ///
    /// # Errors
    ///
    /// [`MoError::DimensionMismatch`](crate::error::MoError::DimensionMismatch)
    /// if `x` does not have [`number_of_variables`](Self::number_of_variables)
    /// components.
    fn eval(&self, x: &[f64]) -> MoResult<Vec<f64>>;
}

/// Draws `n` feasible points and evaluates them.
///
/// Convenience for building test populations.
pub fn sample_front<F, R>(function: &F, n: usize, rng: &mut R) -> MoResult<Vec<Vec<f64>>>
where
    F: MultiObjectiveFunction + ?Sized,
    R: Rng,
{
    (0..n)
        .map(|_| function.eval(&function.constraint().sample(rng)))
        .collect()
}
