//! Training parameters handed to a linear classifier or regressor.

pub mod builder;

use crate::{
    error::{ParameterError, ParameterResult},
    num::Float,
    solver::SolverType,
    utility::{copy_of, copy_opt},
};
use builder::ParameterBuilder;
use itertools::izip;
use ndarray::{Array1, ArrayView1};
use std::iter;

/// Holds the validated configuration of a training run.
///
/// Every array passed in or handed out is copied, so a `Parameter` never
/// shares storage with its caller. Cloning produces a fully independent
/// instance, including the initial solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<F>
where
    F: Float,
{
    solver_type: SolverType,
    /// cost of constraint violation
    c: F,
    /// stopping criterion
    eps: F,
    max_iters: usize,
    /// epsilon in the loss function of epsilon-SVR
    p: F,
    weight: Option<Array1<F>>,
    weight_label: Option<Array1<i32>>,
    ovr_rest_weights: Option<Array1<F>>,
    init_sol: Option<Array1<F>>,
}

impl<F> Parameter<F>
where
    F: Float,
{
    pub const DEFAULT_MAX_ITERS: usize = 1000;

    /// The default epsilon-SVR loss margin, 0.1.
    pub fn default_p() -> F {
        F::lit(0.1)
    }

    /// Create a parameter set with the default iteration cap and loss margin.
    pub fn new(solver_type: SolverType, c: F, eps: F) -> ParameterResult<Self> {
        let mut param = Self {
            solver_type,
            c: F::one(),
            eps: F::one(),
            max_iters: Self::DEFAULT_MAX_ITERS,
            p: Self::default_p(),
            weight: None,
            weight_label: None,
            ovr_rest_weights: None,
            init_sol: None,
        };
        param.set_c(c)?;
        param.set_eps(eps)?;
        Ok(param)
    }

    pub fn with_max_iters(
        solver_type: SolverType,
        c: F,
        max_iters: usize,
        eps: F,
    ) -> ParameterResult<Self> {
        let mut param = Self::new(solver_type, c, eps)?;
        param.set_max_iters(max_iters)?;
        Ok(param)
    }

    pub fn with_p(solver_type: SolverType, c: F, eps: F, p: F) -> ParameterResult<Self> {
        let mut param = Self::new(solver_type, c, eps)?;
        param.set_p(p)?;
        Ok(param)
    }

    pub fn with_max_iters_and_p(
        solver_type: SolverType,
        c: F,
        eps: F,
        max_iters: usize,
        p: F,
    ) -> ParameterResult<Self> {
        let mut param = Self::new(solver_type, c, eps)?;
        param.set_max_iters(max_iters)?;
        param.set_p(p)?;
        Ok(param)
    }

    /// Start a builder for the optional settings. Required values are
    /// validated when the builder is consumed.
    pub fn builder(solver_type: SolverType, c: F, eps: F) -> ParameterBuilder<F> {
        ParameterBuilder::new(solver_type, c, eps)
    }

    pub fn solver_type(&self) -> SolverType {
        self.solver_type
    }

    pub fn set_solver_type(&mut self, solver_type: SolverType) {
        self.solver_type = solver_type;
    }

    /// The cost of constraint violation. Typical values lie between 1 and 1000.
    pub fn c(&self) -> F {
        self.c
    }

    pub fn set_c(&mut self, c: F) -> ParameterResult<()> {
        if c.is_nan() || c <= F::zero() {
            return Err(ParameterError::invalid(format!("C must be > 0, got {}", c)));
        }
        self.c = c;
        Ok(())
    }

    /// The stopping tolerance. 0.01 is a common choice.
    pub fn eps(&self) -> F {
        self.eps
    }

    pub fn set_eps(&mut self, eps: F) -> ParameterResult<()> {
        if eps.is_nan() || eps <= F::zero() {
            return Err(ParameterError::invalid(format!(
                "eps must be > 0, got {}",
                eps
            )));
        }
        self.eps = eps;
        Ok(())
    }

    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    pub fn set_max_iters(&mut self, max_iters: usize) -> ParameterResult<()> {
        if max_iters == 0 {
            return Err(ParameterError::invalid("max_iters must be > 0"));
        }
        self.max_iters = max_iters;
        Ok(())
    }

    /// The epsilon in the loss function of epsilon-SVR.
    pub fn p(&self) -> F {
        self.p
    }

    pub fn set_p(&mut self, p: F) -> ParameterResult<()> {
        if p.is_nan() || p < F::zero() {
            return Err(ParameterError::invalid(format!("p must be >= 0, got {}", p)));
        }
        self.p = p;
        Ok(())
    }

    /// Change the penalty of some classes. The penalty of class
    /// `weight_labels[i]` is scaled by `weights[i]`; classes that are not
    /// listed keep a factor of 1. This helps with unbalanced data or
    /// asymmetric misclassification costs.
    ///
    /// `ovr_rest_weights` scales the penalty of the negative (rest) class when
    /// each listed class is trained one-vs-rest. Passing `None` clears any
    /// previously stored rest weights.
    ///
    /// The previous weight configuration is replaced entirely, and left
    /// untouched if the lengths are inconsistent.
    pub fn set_weights(
        &mut self,
        weights: ArrayView1<F>,
        ovr_rest_weights: Option<ArrayView1<F>>,
        weight_labels: ArrayView1<i32>,
    ) -> ParameterResult<()> {
        if weight_labels.len() != weights.len() {
            return Err(ParameterError::invalid(format!(
                "weight_labels must have the same length as weights ({} != {})",
                weight_labels.len(),
                weights.len()
            )));
        }
        if let Some(rest) = &ovr_rest_weights {
            if rest.len() != weight_labels.len() {
                return Err(ParameterError::invalid(format!(
                    "ovr_rest_weights must have the same length as weight_labels ({} != {})",
                    rest.len(),
                    weight_labels.len()
                )));
            }
        }
        self.weight = Some(copy_of(weights));
        self.weight_label = Some(copy_of(weight_labels));
        self.ovr_rest_weights = ovr_rest_weights.map(copy_of);
        Ok(())
    }

    /// Set the class weights without one-vs-rest weights.
    pub fn set_class_weights(
        &mut self,
        weights: ArrayView1<F>,
        weight_labels: ArrayView1<i32>,
    ) -> ParameterResult<()> {
        self.set_weights(weights, None, weight_labels)
    }

    pub fn weights(&self) -> Option<Array1<F>> {
        copy_opt(&self.weight)
    }

    pub fn ovr_rest_weights(&self) -> Option<Array1<F>> {
        copy_opt(&self.ovr_rest_weights)
    }

    pub fn weight_labels(&self) -> Option<Array1<i32>> {
        copy_opt(&self.weight_label)
    }

    pub fn num_weights(&self) -> usize {
        self.weight.as_ref().map_or(0, |w| w.len())
    }

    pub fn num_ovr_rest_weights(&self) -> usize {
        self.ovr_rest_weights.as_ref().map_or(0, |w| w.len())
    }

    /// Iterate over the configured `(label, weight, rest weight)` triples in
    /// the order they were given.
    pub fn class_weights(&self) -> impl Iterator<Item = (i32, F, Option<F>)> + '_ {
        let labels = self.weight_label.iter().flatten().copied();
        let weights = self.weight.iter().flatten().copied();
        let rest = self
            .ovr_rest_weights
            .iter()
            .flatten()
            .copied()
            .map(Some)
            .chain(iter::repeat(None));
        izip!(labels, weights, rest)
    }

    /// The penalty factor for the class `label`. Classes without a configured
    /// weight get 1. If a label is listed more than once the last entry wins.
    pub fn class_weight(&self, label: i32) -> F {
        self.class_weights()
            .filter(|(l, _, _)| *l == label)
            .last()
            .map_or_else(F::one, |(_, w, _)| w)
    }

    /// The penalty factor for the rest class when `label` is trained
    /// one-vs-rest. Defaults to 1.
    pub fn ovr_rest_weight(&self, label: i32) -> F {
        self.class_weights()
            .filter(|(l, _, _)| *l == label)
            .last()
            .and_then(|(_, _, rest)| rest)
            .unwrap_or_else(F::one)
    }

    /// Set or clear the initial solution used to warm-start training.
    ///
    /// Only [`SolverType::L2R_LR`] and [`SolverType::L2R_L2LOSS_SVC`] make use
    /// of it. Neither the solver nor the length is checked here.
    pub fn set_init_sol(&mut self, init_sol: Option<ArrayView1<F>>) {
        self.init_sol = init_sol.map(copy_of);
    }

    pub fn init_sol(&self) -> Option<Array1<F>> {
        copy_opt(&self.init_sol)
    }

    /// Whether the configured solver would use an initial solution.
    pub fn init_sol_supported(&self) -> bool {
        self.solver_type.supports_init_sol()
    }
}
