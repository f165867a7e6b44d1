//! Evaluation of multi-objective optimization results.
//!
//! Compares sets of objective vectors produced by multi-objective
//! optimizers:
//!
//! - **Dominance**: Pareto dominance between two objective vectors, with a
//!   configurable direction and optional tie tolerance.
//! - **Non-dominated sorting**: Partitions a population into ranked Pareto
//!   fronts (Deb et al., 2002).
//! - **Indicators**: Reduces a candidate front and a reference front to a
//!   single number; currently the additive epsilon indicator.
//! - **Fitness extraction**: Decouples the algorithms above from how
//!   population elements store their objectives.
//!
//! Supporting modules provide benchmark functions ([`benchmark`]), a loss
//! function ([`loss`]) and a reader for delimited vector files ([`io`]).
//!
//! All operations are pure functions of their inputs: nothing is mutated
//! and no state outlives a call, so independent calls may run concurrently.
//!
//! # Example
//!
//! ```
//! use u_moeval::extract::Identity;
//! use u_moeval::indicator::additive_epsilon;
//! use u_moeval::sort::non_dominated_sort;
//!
//! let population = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![0.0, 0.0]];
//! let sorted = non_dominated_sort(&population, &Identity).unwrap();
//! assert_eq!(sorted.ranks, vec![1, 2, 0]);
//!
//! let eps = additive_epsilon(&[vec![2.0, 2.0]], &[vec![1.0, 1.0]]).unwrap();
//! assert_eq!(eps, 1.0);
//! ```

pub mod benchmark;
pub mod dominance;
pub mod error;
pub mod extract;
pub mod indicator;
pub mod io;
pub mod loss;
pub mod sort;

pub use error::{FrontRole, MoError, MoResult};
