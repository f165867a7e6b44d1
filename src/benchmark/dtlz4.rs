//! DTLZ4 scalable benchmark.
//!
//! With `M` objectives over `n` variables in `[0, 1]`, `k = n − M + 1` and
//! `g = Σ_{i ≥ M−1} (x_i − 0.5)²`:
//!
//! ```text
//! f_i = (1 + g) · Π_{j < M−i−1} cos(x_j^α · π/2) · sin(x_{M−i−1}^α · π/2)   (sin term for i > 0)
//! ```
//!
//! where the paper sets `α = 100`; this implementation uses `α = 10`. The
//! Pareto front is the positive part of the unit sphere, reached when
//! `g = 0`.
//!
//! Reference: Deb, Thiele, Laumanns & Zitzler (2002), "Scalable
//! Multi-Objective Optimization Test Problems"

use super::constraint::BoxConstraint;
use super::types::MultiObjectiveFunction;
use crate::error::{ensure_dimension, MoError, MoResult};
use std::f64::consts::FRAC_PI_2;

const ALPHA: i32 = 10;

/// DTLZ4 with scalable objectives and variables.
#[derive(Debug, Clone)]
pub struct Dtlz4 {
    objectives: usize,
    constraint: BoxConstraint,
}

impl Dtlz4 {
    /// DTLZ4 over `n` variables with two objectives.
    pub fn new(n: usize) -> Self {
        Self {
            objectives: 2,
            constraint: BoxConstraint::uniform(n, 0.0, 1.0),
        }
    }

    /// Sets the number of objectives.
    pub fn with_objectives(mut self, objectives: usize) -> Self {
        self.objectives = objectives;
        self
    }
}

impl MultiObjectiveFunction for Dtlz4 {
    fn name(&self) -> &'static str {
        "DTLZ4"
    }

    fn number_of_objectives(&self) -> usize {
        self.objectives
    }

    fn has_scalable_objectives(&self) -> bool {
        true
    }

    fn set_number_of_objectives(&mut self, objectives: usize) {
        self.objectives = objectives;
    }

    fn has_scalable_dimensionality(&self) -> bool {
        true
    }

    fn set_number_of_variables(&mut self, variables: usize) {
        self.constraint = BoxConstraint::uniform(variables, 0.0, 1.0);
    }

    fn constraint(&self) -> &BoxConstraint {
        &self.constraint
    }

    fn eval(&self, x: &[f64]) -> MoResult<Vec<f64>> {
        let n = self.number_of_variables();
        let m = self.objectives;
        ensure_dimension(n, x.len())?;
        if m == 0 {
            return Err(MoError::EmptyVector);
        }
        // at least one distance variable is needed
        if n < m {
            return Err(MoError::DimensionMismatch {
                expected: m,
                found: n,
            });
        }

        let g: f64 = x[m - 1..].iter().map(|&xi| (xi - 0.5).powi(2)).sum();
        let angle = |xj: f64| xj.powi(ALPHA) * FRAC_PI_2;

        let value = (0..m)
            .map(|i| {
                let mut f = 1.0 + g;
                for &xj in &x[..m - i - 1] {
                    f *= angle(xj).cos();
                }
                if i != 0 {
                    f *= angle(x[m - i - 1]).sin();
                }
                f
            })
            .collect();

        Ok(value)
    }
}
