use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{errors::ShapeError, math::matrix::Matrix};

/// Fully connected layer `y = x · W + b`.
///
/// `weights` is (input_size × size) and `biases` is (1 × size). The same
/// struct carries a layer's gradients, which always share its shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dense {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Dense {
    /// Weights drawn from N(0, 1) scaled by `scale`; biases start at zero.
    pub fn new<R: Rng + ?Sized>(input_size: usize, size: usize, scale: f64, rng: &mut R) -> Dense {
        Dense {
            weights: Matrix::standard_normal(input_size, size, rng).scale(scale),
            biases: Matrix::zeros(1, size),
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn size(&self) -> usize {
        self.weights.cols
    }

    /// Checks that the bias is a single row as wide as the weight matrix.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.biases.shape() != (1, self.size()) {
            return Err(ShapeError::ShapeMismatch {
                op: "dense_bias",
                left: self.weights.shape(),
                right: self.biases.shape(),
            });
        }
        Ok(())
    }

    /// Pre-activation `input · W + b`, bias broadcast across rows.
    pub fn linear(&self, input: &Matrix) -> Result<Matrix, ShapeError> {
        input.matmul(&self.weights)?.add_row(&self.biases)
    }

    /// Given the layer input and ∂L/∂(pre-activation), returns
    /// `(inputᵀ · δ, column_sum(δ))` packed as a `Dense`.
    ///
    /// `input` must be N × input_size and `delta` N × size.
    pub fn compute_gradients(&self, input: &Matrix, delta: &Matrix) -> Result<Dense, ShapeError> {
        if input.cols != self.input_size() {
            return Err(ShapeError::ShapeMismatch {
                op: "dense_grad_input",
                left: input.shape(),
                right: self.weights.shape(),
            });
        }
        if delta.cols != self.size() {
            return Err(ShapeError::ShapeMismatch {
                op: "dense_grad_delta",
                left: delta.shape(),
                right: self.weights.shape(),
            });
        }
        Ok(Dense {
            weights: input.transpose().matmul(delta)?,
            biases: delta.sum_columns(),
        })
    }

    /// Propagates δ back through the weights: `δ · Wᵀ`.
    pub fn backprop_delta(&self, delta: &Matrix) -> Result<Matrix, ShapeError> {
        delta.matmul(&self.weights.transpose())
    }

    /// Gradients must have this layer's shapes; nothing is written otherwise.
    pub fn check_gradients(&self, grads: &Dense) -> Result<(), ShapeError> {
        for (op, p, g) in [
            ("sgd_weights", &self.weights, &grads.weights),
            ("sgd_biases", &self.biases, &grads.biases),
        ] {
            if p.shape() != g.shape() {
                return Err(ShapeError::ShapeMismatch { op, left: p.shape(), right: g.shape() });
            }
        }
        Ok(())
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, grads: &Dense, lr: f64) -> Result<(), ShapeError> {
        self.check_gradients(grads)?;
        self.weights = self.weights.sub(&grads.weights.scale(lr))?;
        self.biases = self.biases.sub(&grads.biases.scale(lr))?;
        Ok(())
    }
}
