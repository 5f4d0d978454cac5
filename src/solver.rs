//! The closed set of solvers a training engine can be asked to run.

use crate::error::{ParameterError, ParameterResult};
use std::fmt;

/// Identifies the optimization problem and algorithm used for training. The
/// numeric ids match the ones used by liblinear.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverType {
    /// L2-regularized logistic regression (primal)
    L2R_LR,
    /// L2-regularized L2-loss support vector classification (dual)
    L2R_L2LOSS_SVC_DUAL,
    /// L2-regularized L2-loss support vector classification (primal)
    L2R_L2LOSS_SVC,
    /// L2-regularized L1-loss support vector classification (dual)
    L2R_L1LOSS_SVC_DUAL,
    /// Multi-class support vector classification by Crammer and Singer
    MCSVM_CS,
    /// L1-regularized L2-loss support vector classification
    L1R_L2LOSS_SVC,
    /// L1-regularized logistic regression
    L1R_LR,
    /// L2-regularized logistic regression (dual)
    L2R_LR_DUAL,
    /// L2-regularized L2-loss support vector regression (primal)
    L2R_L2LOSS_SVR,
    /// L2-regularized L2-loss support vector regression (dual)
    L2R_L2LOSS_SVR_DUAL,
    /// L2-regularized L1-loss support vector regression (dual)
    L2R_L1LOSS_SVR_DUAL,
    /// One-class support vector machine (dual)
    ONECLASS_SVM,
}

use SolverType::*;

impl SolverType {
    pub const ALL: [SolverType; 12] = [
        L2R_LR,
        L2R_L2LOSS_SVC_DUAL,
        L2R_L2LOSS_SVC,
        L2R_L1LOSS_SVC_DUAL,
        MCSVM_CS,
        L1R_L2LOSS_SVC,
        L1R_LR,
        L2R_LR_DUAL,
        L2R_L2LOSS_SVR,
        L2R_L2LOSS_SVR_DUAL,
        L2R_L1LOSS_SVR_DUAL,
        ONECLASS_SVM,
    ];

    /// The liblinear numeric id of the solver.
    pub fn id(self) -> i32 {
        match self {
            L2R_LR => 0,
            L2R_L2LOSS_SVC_DUAL => 1,
            L2R_L2LOSS_SVC => 2,
            L2R_L1LOSS_SVC_DUAL => 3,
            MCSVM_CS => 4,
            L1R_L2LOSS_SVC => 5,
            L1R_LR => 6,
            L2R_LR_DUAL => 7,
            L2R_L2LOSS_SVR => 11,
            L2R_L2LOSS_SVR_DUAL => 12,
            L2R_L1LOSS_SVR_DUAL => 13,
            ONECLASS_SVM => 21,
        }
    }

    /// Look up a solver by its liblinear numeric id.
    pub fn from_id(id: i32) -> ParameterResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.id() == id)
            .ok_or_else(|| ParameterError::invalid(format!("unknown solver id {}", id)))
    }

    pub fn is_logistic_regression(self) -> bool {
        matches!(self, L2R_LR | L1R_LR | L2R_LR_DUAL)
    }

    /// Whether the solver trains a regressor, which is where the
    /// epsilon-insensitive margin `p` applies.
    pub fn is_support_vector_regression(self) -> bool {
        matches!(
            self,
            L2R_L2LOSS_SVR | L2R_L2LOSS_SVR_DUAL | L2R_L1LOSS_SVR_DUAL
        )
    }

    /// Whether the solver can be warm-started from an initial solution.
    pub fn supports_init_sol(self) -> bool {
        matches!(self, L2R_LR | L2R_L2LOSS_SVC)
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
