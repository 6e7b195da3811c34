pub mod errors;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod workloads;
pub mod profile;

// Convenience re-exports
pub use errors::{ShapeError, TrainError};
pub use math::matrix::Matrix;
pub use activation::activation::Relu;
pub use layers::dense::Dense;
pub use network::params::{Gradients, Params};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{step, Batch, StepOutput, TrainConfig};
pub use profile::{Profiler, ProfileReport};
