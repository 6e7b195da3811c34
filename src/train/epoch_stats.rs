use serde::{Serialize, Deserialize};

/// Per-epoch statistics emitted by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Loss computed by this epoch's step, before its update.
    pub loss: f64,
    /// Wall-clock duration of the step in milliseconds.
    pub elapsed_ms: u64,
}
