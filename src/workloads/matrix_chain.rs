use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{errors::ShapeError, math::matrix::Matrix};

/// A(100×200) · B(200×300) · C(300×400) · D(400×500)
pub const DEFAULT_CHAIN_DIMS: [usize; 5] = [100, 200, 300, 400, 500];

/// Multiplies the default four-matrix chain, drawn U[0, 1) from `seed`.
pub fn matrix_chain(seed: u64) -> Result<Matrix, ShapeError> {
    matrix_chain_with_dims(&DEFAULT_CHAIN_DIMS, seed)
}

/// `dims = [d0, d1, .., dk]` describes k matrices, the i-th being
/// d(i) × d(i+1). All are drawn in order from one seeded generator and
/// multiplied left to right.
pub fn matrix_chain_with_dims(dims: &[usize], seed: u64) -> Result<Matrix, ShapeError> {
    if dims.len() < 2 || dims.contains(&0) {
        return Err(ShapeError::InvalidChain { dims: dims.to_vec() });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let factors: Vec<Matrix> = dims
        .windows(2)
        .map(|w| Matrix::uniform(w[0], w[1], &mut rng))
        .collect();

    let mut factors = factors.into_iter();
    let mut result = factors
        .next()
        .ok_or_else(|| ShapeError::InvalidChain { dims: dims.to_vec() })?;
    for factor in factors {
        result = result.matmul(&factor)?;
    }
    debug!("matrix chain {:?} -> {:?}", dims, result.shape());
    Ok(result)
}
