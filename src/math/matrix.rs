use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::errors::ShapeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from row vectors. Every row must have the same,
    /// non-zero length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, ShapeError> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ShapeError::RaggedData),
        };
        if data.iter().any(|row| row.len() != cols) {
            return Err(ShapeError::RaggedData);
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Independent N(0, 1) draws, filled row by row from `rng`.
    ///
    /// The same seeded generator state always yields the same matrix.
    pub fn standard_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng);
            }
        }
        res
    }

    /// Independent U[0, 1) draws, filled row by row from `rng`.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Matrix product `self · rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("matmul", rhs));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                for j in 0..res.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        Ok(res)
    }

    /// Adds a 1×C row vector to every row of an R×C matrix.
    pub fn add_row(&self, row: &Matrix) -> Result<Matrix, ShapeError> {
        if row.rows != 1 || row.cols != self.cols {
            return Err(self.mismatch("add_row", row));
        }

        let bias = &row.data[0];
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|r| r.iter().zip(bias.iter()).map(|(x, b)| x + b).collect())
                .collect(),
        })
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        self.zip_with("sub", rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        self.zip_with("hadamard", rhs, |a, b| a * b)
    }

    /// Column-wise sum, keeping the row dimension: R×C -> 1×C.
    pub fn sum_columns(&self) -> Matrix {
        let mut res = Matrix::zeros(1, self.cols);
        for row in &self.data {
            for (acc, x) in res.data[0].iter_mut().zip(row.iter()) {
                *acc += x;
            }
        }
        res
    }

    /// Mean over all elements. An empty matrix has mean 0.
    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.data.iter().flatten().sum::<f64>() / self.len() as f64
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Matrix, f: F) -> Result<Matrix, ShapeError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch(op, rhs));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .zip(rhs.data.iter())
                .map(|(ra, rb)| ra.iter().zip(rb.iter()).map(|(a, b)| f(*a, *b)).collect())
                .collect(),
        })
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> ShapeError {
        ShapeError::ShapeMismatch { op, left: self.shape(), right: rhs.shape() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(rows).unwrap()
    }

    #[test]
    fn matmul_known_values() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0], vec![6.0]]);
        assert_eq!(a.matmul(&b).unwrap(), m(vec![vec![17.0], vec![39.0]]));
    }

    #[test]
    fn matmul_rejects_inner_dim_mismatch() {
        let a = Matrix::zeros(4, 2);
        let b = Matrix::zeros(3, 3);
        assert_eq!(
            a.matmul(&b),
            Err(ShapeError::ShapeMismatch { op: "matmul", left: (4, 2), right: (3, 3) })
        );
    }

    #[test]
    fn add_row_broadcasts_over_rows() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![10.0, 20.0]]);
        assert_eq!(a.add_row(&b).unwrap(), m(vec![vec![11.0, 22.0], vec![13.0, 24.0]]));
        assert!(a.add_row(&Matrix::zeros(2, 2)).is_err());
    }

    #[test]
    fn sum_columns_keeps_one_row() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(a.sum_columns(), m(vec![vec![9.0, 12.0]]));
    }

    #[test]
    fn from_data_rejects_ragged_and_empty() {
        assert_eq!(Matrix::from_data(vec![]), Err(ShapeError::RaggedData));
        assert_eq!(
            Matrix::from_data(vec![vec![1.0], vec![1.0, 2.0]]),
            Err(ShapeError::RaggedData)
        );
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let a = Matrix::standard_normal(3, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::standard_normal(3, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let u = Matrix::uniform(5, 5, &mut StdRng::seed_from_u64(7));
        assert!(u.data.iter().flatten().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn transpose_and_mean() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(a.transpose().shape(), (3, 1));
        assert_eq!(a.mean(), 2.0);
    }
}
