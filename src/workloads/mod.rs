//! The toy workloads driven by the profiler binary.

pub mod matrix_chain;
pub mod sqrt_sum;

pub use matrix_chain::{matrix_chain, matrix_chain_with_dims, DEFAULT_CHAIN_DIMS};
pub use sqrt_sum::sqrt_sum;

use crate::{errors::TrainError, train::{train_from_config, TrainConfig}};

/// Trains the two-layer network on synthetic data and returns the loss of
/// the last epoch (`None` when `config.epochs == 0`).
pub fn train_demo(config: &TrainConfig) -> Result<Option<f64>, TrainError> {
    Ok(train_from_config(config)?.final_loss())
}
