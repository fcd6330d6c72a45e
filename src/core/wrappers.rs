//! Trait implementations for `faer::Mat<f64>` and conversions to and from [`Matrix`].
//!
//! Implementing [`MatShape`] and [`MatrixGet`] for `faer::Mat` lets the pairwise
//! arithmetic in [`crate::utils::arith`] mix faer matrices with ours, and the
//! conversions make it easy to hand a [`Matrix`] to faer's factorizations.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::MatError;
use crate::matrix::Matrix;
use faer::Mat;

impl MatShape for Mat<f64> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl MatrixGet<f64> for Mat<f64> {
    fn at(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

/// Implements matrix-vector multiplication for [`Matrix`].
///
/// Computes `y = A * x` where `x` has `ncols` entries and `y` has `nrows`.
impl MatVec<Vec<f64>> for Matrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self
                .row_slice(i)
                .iter()
                .zip(x.iter())
                .map(|(aij, xj)| aij * xj)
                .sum();
        }
    }
}

impl Matrix {
    /// Copy into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }
}

/// Copy a faer matrix. Fails with `InvalidDimension` if `m` has no rows or no columns.
impl TryFrom<&Mat<f64>> for Matrix {
    type Error = MatError;

    fn try_from(m: &Mat<f64>) -> Result<Self, MatError> {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}
