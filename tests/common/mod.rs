//! Utility functions for testing
use linear_param::{Parameter, ParameterResult, SolverType};
use ndarray::array;

/// The L2-regularized logistic regression set used throughout the tests.
pub fn l2r_lr() -> ParameterResult<Parameter<f64>> {
    Parameter::new(SolverType::L2R_LR, 1.0, 0.01)
}

/// Same as `l2r_lr` with the class weights [2.0, 3.0] for labels [1, 2].
pub fn weighted_l2r_lr() -> ParameterResult<Parameter<f64>> {
    let mut param = l2r_lr()?;
    param.set_class_weights(array![2.0, 3.0].view(), array![1, 2].view())?;
    Ok(param)
}
