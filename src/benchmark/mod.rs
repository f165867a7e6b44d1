//! Benchmark objective functions.
//!
//! Producers of objective vectors for exercising sorting and indicators:
//! each function maps a box-constrained search point to an objective vector.
//!
//! # Key Types
//!
//! - [`MultiObjectiveFunction`]: The function contract
//! - [`BoxConstraint`]: Per-variable bounds, feasibility and sampling
//! - [`Registry`]: Explicit name → constructor lookup
//!
//! # Functions
//!
//! - [`Fonseca`]: Bi-objective, scalable dimensionality
//! - [`Dtlz4`]: Scalable objectives and dimensionality, spherical front

mod constraint;
mod dtlz4;
mod fonseca;
mod registry;
mod types;

pub use constraint::BoxConstraint;
pub use dtlz4::Dtlz4;
pub use fonseca::Fonseca;
pub use registry::{Constructor, Registry};
pub use types::{sample_front, MultiObjectiveFunction};
