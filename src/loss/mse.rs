use crate::{errors::ShapeError, math::matrix::Matrix};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²) over every element.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64, ShapeError> {
        let diff = predicted.sub(expected)?;
        Ok(diff.map(|x| x * x).mean())
    }

    /// ∂L/∂predicted: 2 · (predicted - expected) / expected.len()
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Result<Matrix, ShapeError> {
        let n = expected.len() as f64;
        Ok(predicted.sub(expected)?.scale(2.0 / n))
    }
}
