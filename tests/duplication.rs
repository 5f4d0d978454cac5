//! cloning and value equality

use anyhow::Result;
use linear_param::{Parameter, SolverType};
use ndarray::array;
mod common;
use common::weighted_l2r_lr;

#[test]
fn clone_weights_are_independent() -> Result<()> {
    let orig: Parameter<f64> = weighted_l2r_lr()?;
    let mut dup = orig.clone();
    let mut dup_weights = dup.weights().unwrap();
    dup_weights.mapv_inplace(|_| 9.0);
    dup.set_class_weights(dup_weights.view(), array![1, 2].view())?;
    assert_eq!(dup.weights(), Some(array![9.0, 9.0]));
    assert_eq!(orig.weights(), Some(array![2.0, 3.0]));
    assert_eq!(orig.weight_labels(), Some(array![1, 2]));
    Ok(())
}

#[test]
fn clone_copies_scalars() -> Result<()> {
    let mut orig = Parameter::with_max_iters_and_p(SolverType::L2R_L2LOSS_SVR, 4.0, 0.2, 12, 0.3)?;
    orig.set_weights(
        array![1.5].view(),
        Some(array![0.5].view()),
        array![3].view(),
    )?;
    let mut dup = orig.clone();
    assert_eq!(dup, orig);
    assert_eq!(dup.ovr_rest_weights(), Some(array![0.5]));

    dup.set_c(8.0)?;
    dup.set_solver_type(SolverType::L2R_L2LOSS_SVR_DUAL);
    assert_eq!(orig.c(), 4.0);
    assert_eq!(orig.solver_type(), SolverType::L2R_L2LOSS_SVR);
    assert_ne!(dup, orig);
    Ok(())
}

/// The initial solution is deep-copied like every other array.
#[test]
fn clone_init_sol_is_independent() -> Result<()> {
    let mut orig = weighted_l2r_lr()?;
    orig.set_init_sol(Some(array![0.5, 0.5, 0.5].view()));
    let mut dup = orig.clone();
    assert_eq!(dup.init_sol(), Some(array![0.5, 0.5, 0.5]));

    dup.set_init_sol(Some(array![1.0].view()));
    assert_eq!(orig.init_sol(), Some(array![0.5, 0.5, 0.5]));
    orig.set_init_sol(None);
    assert_eq!(dup.init_sol(), Some(array![1.0]));
    Ok(())
}

#[test]
fn identical_construction_is_equal() -> Result<()> {
    let mut first = weighted_l2r_lr()?;
    let second = weighted_l2r_lr()?;
    assert_eq!(first, second);
    assert_eq!(first.weights(), second.weights());
    assert_eq!(first.weight_labels(), second.weight_labels());
    assert_eq!(first.ovr_rest_weights(), second.ovr_rest_weights());
    assert_eq!(first.init_sol(), second.init_sol());
    assert_eq!(first.num_weights(), second.num_weights());

    first.set_class_weights(array![0.0, 0.0].view(), array![1, 2].view())?;
    assert_eq!(second.weights(), Some(array![2.0, 3.0]));
    Ok(())
}
