//! Builder for parameter sets with optional settings
use super::Parameter;
use crate::{
    error::{ParameterError, ParameterResult},
    num::Float,
    solver::SolverType,
    utility::copy_of,
};
use ndarray::{Array1, ArrayView1};

/// Collects the required and optional settings of a [`Parameter`]. Nothing is
/// validated until [`build`](ParameterBuilder::build), which applies each
/// setting through the same checks as the setters on `Parameter`.
pub struct ParameterBuilder<F>
where
    F: Float,
{
    solver_type: SolverType,
    c: F,
    eps: F,
    max_iters: Option<usize>,
    p: Option<F>,
    /// class weights and the labels they apply to
    weights: Option<(Array1<F>, Array1<i32>)>,
    ovr_rest_weights: Option<Array1<F>>,
    init_sol: Option<Array1<F>>,
}

impl<F> ParameterBuilder<F>
where
    F: Float,
{
    pub fn new(solver_type: SolverType, c: F, eps: F) -> Self {
        Self {
            solver_type,
            c,
            eps,
            max_iters: None,
            p: None,
            weights: None,
            ovr_rest_weights: None,
            init_sol: None,
        }
    }

    /// Use a maximum number of iterations. Defaults to 1000.
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    /// Set the epsilon-SVR loss margin. Defaults to 0.1.
    pub fn p(mut self, p: F) -> Self {
        self.p = Some(p);
        self
    }

    /// Scale the penalty of class `weight_labels[i]` by `weights[i]`.
    pub fn weights(mut self, weights: ArrayView1<F>, weight_labels: ArrayView1<i32>) -> Self {
        self.weights = Some((copy_of(weights), copy_of(weight_labels)));
        self
    }

    /// One-vs-rest weights for the negative class, one per weight label.
    /// Requires `weights` to be set as well.
    pub fn ovr_rest_weights(mut self, ovr_rest_weights: ArrayView1<F>) -> Self {
        self.ovr_rest_weights = Some(copy_of(ovr_rest_weights));
        self
    }

    pub fn init_sol(mut self, init_sol: ArrayView1<F>) -> Self {
        self.init_sol = Some(copy_of(init_sol));
        self
    }

    pub fn build(self) -> ParameterResult<Parameter<F>> {
        let mut param = Parameter::new(self.solver_type, self.c, self.eps)?;
        if let Some(max_iters) = self.max_iters {
            param.set_max_iters(max_iters)?;
        }
        if let Some(p) = self.p {
            param.set_p(p)?;
        }
        match (&self.weights, &self.ovr_rest_weights) {
            (Some((weights, labels)), rest) => param.set_weights(
                weights.view(),
                rest.as_ref().map(|r| r.view()),
                labels.view(),
            )?,
            (None, Some(_)) => {
                return Err(ParameterError::invalid(
                    "ovr_rest_weights given without class weights",
                ))
            }
            (None, None) => {}
        }
        param.set_init_sol(self.init_sol.as_ref().map(|v| v.view()));
        Ok(param)
    }
}
