//! Loss functions over batches of label and prediction vectors.

use crate::error::{ensure_dimension, MoResult};

/// Absolute loss.
///
/// Sums, over all rows, the Euclidean distance between a label row and the
/// prediction row at the same position:
///
/// ```text
/// L = Σ_i ‖labels_i − predictions_i‖₂
/// ```
///
/// For one-dimensional outputs this is the sum of absolute differences.
///
/// ```
/// use u_moeval::loss::AbsoluteLoss;
///
/// let labels = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
/// let predictions = vec![vec![3.0, 4.0], vec![1.0, 1.0]];
/// assert_eq!(AbsoluteLoss.eval(&labels, &predictions).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteLoss;

impl AbsoluteLoss {
    /// Name of the loss.
    pub fn name(&self) -> &'static str {
        "AbsoluteLoss"
    }

    /// Evaluates the loss of `predictions` against `labels`.
    ///
    /// # Errors
    ///
    /// [`MoError::DimensionMismatch`](crate::error::MoError::DimensionMismatch)
    /// if the batches differ in row count or any row pair differs in length.
    pub fn eval<L, P>(&self, labels: &[L], predictions: &[P]) -> MoResult<f64>
    where
        L: AsRef<[f64]>,
        P: AsRef<[f64]>,
    {
        ensure_dimension(labels.len(), predictions.len())?;

        let mut error = 0.0;
        for (label, prediction) in labels.iter().zip(predictions.iter()) {
            let (label, prediction) = (label.as_ref(), prediction.as_ref());
            ensure_dimension(label.len(), prediction.len())?;
            error += label
                .iter()
                .zip(prediction.iter())
                .map(|(l, p)| (l - p) * (l - p))
                .sum::<f64>()
                .sqrt();
        }
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoError;

    #[test]
    fn test_scalar_outputs_sum_absolute_differences() {
        let labels = vec![[1.0], [2.0], [-3.0]];
        let predictions = vec![[1.5], [0.0], [-3.0]];
        assert_eq!(AbsoluteLoss.eval(&labels, &predictions), Ok(2.5));
    }

    #[test]
    fn test_vector_outputs() {
        let labels = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let predictions = vec![vec![3.0, 4.0], vec![1.0, 1.0]];
        assert_eq!(AbsoluteLoss.eval(&labels, &predictions), Ok(5.0));
        assert_eq!(AbsoluteLoss.name(), "AbsoluteLoss");
    }

    #[test]
    fn test_empty_batch() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(AbsoluteLoss.eval(&empty, &empty), Ok(0.0));
    }

    #[test]
    fn test_mismatches() {
        let labels = vec![vec![0.0, 0.0]];
        assert_eq!(
            AbsoluteLoss.eval(&labels, &[vec![0.0, 0.0], vec![1.0, 1.0]]),
            Err(MoError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            AbsoluteLoss.eval(&labels, &[vec![0.0]]),
            Err(MoError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
