use crate::math::matrix::Matrix;

/// Rectified-linear unit, the hidden-layer activation of the two-layer network.
pub struct Relu;

impl Relu {
    /// max(x, 0)
    pub fn function(x: f64) -> f64 {
        if x > 0.0 { x } else { 0.0 }
    }

    /// 1 above zero, 0 at and below zero. The kink at exactly 0 maps to 0.
    pub fn derivative(x: f64) -> f64 {
        if x > 0.0 { 1.0 } else { 0.0 }
    }

    pub fn forward(pre: &Matrix) -> Matrix {
        pre.map(Relu::function)
    }

    /// Element-wise derivative mask of a pre-activation matrix.
    pub fn mask(pre: &Matrix) -> Matrix {
        pre.map(Relu::derivative)
    }
}
