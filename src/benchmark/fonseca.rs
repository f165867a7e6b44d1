//! Fonseca & Fleming bi-objective benchmark.
//!
//! ```text
//! f1(x) = 1 − exp(−Σ (x_i − 1/√n)²)
//! f2(x) = 1 − exp(−Σ (x_i + 1/√n)²)
//! ```
//!
//! over `x ∈ [−4, 4]^n`. The Pareto set is the segment
//! `x_1 = … = x_n ∈ [−1/√n, 1/√n]`.
//!
//! Reference: Fonseca & Fleming (1995), "An Overview of Evolutionary
//! Algorithms in Multiobjective Optimization"

use super::constraint::BoxConstraint;
use super::types::MultiObjectiveFunction;
use crate::error::{ensure_dimension, MoResult};

const LOWER: f64 = -4.0;
const UPPER: f64 = 4.0;

/// The Fonseca function with a scalable number of variables.
#[derive(Debug, Clone)]
pub struct Fonseca {
    constraint: BoxConstraint,
}

impl Fonseca {
    /// Fonseca over `n` variables.
    pub fn new(n: usize) -> Self {
        Self {
            constraint: BoxConstraint::uniform(n, LOWER, UPPER),
        }
    }
}

impl MultiObjectiveFunction for Fonseca {
    fn name(&self) -> &'static str {
        "Fonseca"
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn has_scalable_dimensionality(&self) -> bool {
        true
    }

    fn set_number_of_variables(&mut self, variables: usize) {
        self.constraint = BoxConstraint::uniform(variables, LOWER, UPPER);
    }

    fn constraint(&self) -> &BoxConstraint {
        &self.constraint
    }

    fn eval(&self, x: &[f64]) -> MoResult<Vec<f64>> {
        ensure_dimension(self.number_of_variables(), x.len())?;

        let d = 1.0 / (x.len() as f64).sqrt();
        let (sum1, sum2) = x.iter().fold((0.0, 0.0), |(s1, s2), &xi| {
            (s1 + (xi - d).powi(2), s2 + (xi + d).powi(2))
        });

        Ok(vec![1.0 - (-sum1).exp(), 1.0 - (-sum2).exp()])
    }
}
