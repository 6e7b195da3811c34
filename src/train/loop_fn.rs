use std::time::Instant;

use log::debug;

use crate::errors::TrainError;
use crate::network::params::Params;
use crate::train::batch::Batch;
use crate::train::epoch_stats::EpochStats;
use crate::train::step::step;

/// Runs `epochs` sequential full-batch steps on the same `batch`.
///
/// There is no shuffling, validation split or convergence check; each step
/// only carries forward the parameters of the previous one. Returns the
/// final parameters and one `EpochStats` per step.
pub fn train_loop(
    batch: &Batch,
    params: Params,
    learning_rate: f64,
    epochs: usize,
) -> Result<(Params, Vec<EpochStats>), TrainError> {
    let mut params = params;
    let mut history = Vec::with_capacity(epochs);

    for epoch in 1..=epochs {
        let t_start = Instant::now();
        let out = step(&batch.inputs, &batch.targets, &params, learning_rate)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        debug!("epoch {epoch}/{epochs}: loss = {:.6} ({elapsed_ms} ms)", out.loss);

        params = out.params;
        history.push(EpochStats {
            epoch,
            total_epochs: epochs,
            loss: out.loss,
            elapsed_ms,
        });
    }

    Ok((params, history))
}
