pub mod batch;
pub mod epoch_stats;
pub mod loop_fn;
pub mod step;
pub mod train_config;
pub mod trainer;

pub use batch::Batch;
pub use epoch_stats::EpochStats;
pub use loop_fn::train_loop;
pub use step::{loss_and_gradients, step, StepOutput};
pub use train_config::TrainConfig;
pub use trainer::{train_from_config, TrainRun};
