//! Validated training parameters for liblinear-style linear models.
//!
//! A [`Parameter`] holds the solver choice, regularization strength, stopping
//! tolerance, iteration cap, class weights and an optional warm-start vector.
//! It is the input to a training engine and performs no optimization itself.

pub mod error;
pub mod num;
pub mod parameter;
pub mod solver;
pub mod utility;

pub use error::{ParameterError, ParameterResult};
pub use ndarray::Array1;
pub use num::Float;
pub use parameter::{builder::ParameterBuilder, Parameter};
pub use solver::SolverType;
