use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{errors::ShapeError, layers::dense::Dense, math::matrix::Matrix};

/// Parameters of the fixed two-layer network.
///
/// - `hidden.weights` = W1 (F × H), `hidden.biases` = b1 (1 × H)
/// - `output.weights` = W2 (H × 1), `output.biases` = b2 (1 × 1)
///
/// Owned by the caller and threaded through each training step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub hidden: Dense,
    pub output: Dense,
}

/// One gradient per parameter array, same shapes as `Params`.
/// Built fresh by every backward pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    pub hidden: Dense,
    pub output: Dense,
}

impl Params {
    /// Draws W1 then W2 from N(0, 1) · `init_scale`; b1 and b2 are zero.
    pub fn init<R: Rng + ?Sized>(features: usize, hidden: usize, init_scale: f64, rng: &mut R) -> Params {
        let hidden = Dense::new(features, hidden, init_scale, rng);
        let output = Dense::new(hidden.size(), 1, init_scale, rng);
        Params { hidden, output }
    }

    pub fn features(&self) -> usize {
        self.hidden.input_size()
    }

    pub fn hidden_width(&self) -> usize {
        self.hidden.size()
    }

    /// Enforces the chain `inputs (N×F) · W1 (F×H) · W2 (H×1)` and the
    /// single-row bias shapes.
    pub fn validate(&self, inputs: &Matrix) -> Result<(), ShapeError> {
        if self.features() != inputs.cols {
            return Err(ShapeError::ShapeMismatch {
                op: "input_features",
                left: inputs.shape(),
                right: self.hidden.weights.shape(),
            });
        }
        self.hidden.validate()?;
        if self.output.input_size() != self.hidden_width() || self.output.size() != 1 {
            return Err(ShapeError::ShapeMismatch {
                op: "hidden_to_output",
                left: self.hidden.weights.shape(),
                right: self.output.weights.shape(),
            });
        }
        self.output.validate()
    }
}
