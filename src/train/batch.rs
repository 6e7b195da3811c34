use rand::Rng;

use crate::{errors::ShapeError, math::matrix::Matrix};

/// `inputs` (N × F) paired with `targets` (N × 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl Batch {
    pub fn new(inputs: Matrix, targets: Matrix) -> Result<Batch, ShapeError> {
        check_rows(&inputs, &targets)?;
        Ok(Batch { inputs, targets })
    }

    /// Standard-normal inputs, then standard-normal targets, from one generator.
    pub fn synthetic<R: Rng + ?Sized>(samples: usize, features: usize, rng: &mut R) -> Batch {
        let inputs = Matrix::standard_normal(samples, features, rng);
        let targets = Matrix::standard_normal(samples, 1, rng);
        Batch { inputs, targets }
    }

    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn features(&self) -> usize {
        self.inputs.cols
    }
}

/// Same row count on both sides and a single target column.
pub(crate) fn check_rows(inputs: &Matrix, targets: &Matrix) -> Result<(), ShapeError> {
    if inputs.rows != targets.rows || targets.cols != 1 {
        return Err(ShapeError::ShapeMismatch {
            op: "batch_rows",
            left: inputs.shape(),
            right: targets.shape(),
        });
    }
    Ok(())
}
