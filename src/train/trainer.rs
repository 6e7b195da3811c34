use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    errors::TrainError,
    network::params::Params,
    train::{batch::Batch, epoch_stats::EpochStats, loop_fn::train_loop, train_config::TrainConfig},
};

/// Outcome of [`train_from_config`].
#[derive(Debug, Clone)]
pub struct TrainRun {
    pub params: Params,
    pub history: Vec<EpochStats>,
}

impl TrainRun {
    pub fn first_loss(&self) -> Option<f64> {
        self.history.first().map(|s| s.loss)
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.history.last().map(|s| s.loss)
    }
}

/// Seeds one generator from `config.seed`, draws the synthetic batch and
/// then the initial parameters from it, and trains for `config.epochs`.
pub fn train_from_config(config: &TrainConfig) -> Result<TrainRun, TrainError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let batch = Batch::synthetic(config.samples, config.features, &mut rng);
    let params = Params::init(config.features, config.hidden, config.init_scale, &mut rng);

    info!(
        "training {}x{} -> {} -> 1 for {} epochs (lr = {}, seed = {})",
        config.samples, config.features, config.hidden, config.epochs, config.learning_rate, config.seed
    );

    let (params, history) = train_loop(&batch, params, config.learning_rate, config.epochs)?;
    let run = TrainRun { params, history };

    if let (Some(first), Some(last)) = (run.first_loss(), run.final_loss()) {
        info!("loss {first:.6} -> {last:.6}");
    }
    Ok(run)
}
