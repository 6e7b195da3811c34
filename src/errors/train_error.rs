use thiserror::Error;

use super::shape_error::ShapeError;

/// Errors produced by a training step or a training run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Invalid training configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl TrainError {
    /// True when the failure is a dimension mismatch between operands.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, TrainError::Shape(ShapeError::ShapeMismatch { .. }))
    }
}
