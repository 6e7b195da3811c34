use log::warn;

use crate::{
    errors::TrainError,
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::{backward, forward, Gradients, Params},
    optim::sgd::Sgd,
    train::batch::check_rows,
};

/// Result of one training step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    /// MSE of the parameters *before* the update.
    pub loss: f64,
    /// Parameters after `p -= lr * g`.
    pub params: Params,
    pub gradients: Gradients,
}

/// Forward pass, loss and closed-form gradients, without touching `params`.
///
/// All shapes are validated up front.
pub fn loss_and_gradients(
    inputs: &Matrix,
    targets: &Matrix,
    params: &Params,
) -> Result<(f64, Gradients), TrainError> {
    check_rows(inputs, targets)?;
    params.validate(inputs)?;

    let cache = forward(params, inputs)?;
    let loss = MseLoss::loss(&cache.output, targets)?;
    let gradients = backward(params, inputs, targets, &cache)?;
    Ok((loss, gradients))
}

/// One full gradient-descent step on a batch.
///
/// `params` is left untouched; the updated copy is returned in
/// [`StepOutput::params`]. On a shape mismatch nothing is computed.
/// Divergence (huge or NaN loss) is logged, not reported as an error.
pub fn step(
    inputs: &Matrix,
    targets: &Matrix,
    params: &Params,
    learning_rate: f64,
) -> Result<StepOutput, TrainError> {
    let (loss, gradients) = loss_and_gradients(inputs, targets, params)?;
    if !loss.is_finite() {
        warn!("non-finite loss {loss}; training has diverged");
    }

    let mut updated = params.clone();
    Sgd::new(learning_rate).step(&mut updated, &gradients)?;

    Ok(StepOutput { loss, params: updated, gradients })
}
