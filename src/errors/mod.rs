//! Error types for the numeric core, training, and profiling report I/O.

pub mod shape_error;
pub mod train_error;
pub mod io_error;

pub use shape_error::ShapeError;
pub use train_error::TrainError;
pub use io_error::{ConfigError, ReportError};
