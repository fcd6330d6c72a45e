//! Determinant, cofactor matrix, adjugate and inverse by cofactor expansion.
//!
//! The determinant is computed by Laplace expansion along the first row, recursing on
//! minors until the 2x2 closed form. Cost is O(n!), so this is only practical for small
//! matrices; there is no LU fallback. Floating-point error accumulates with `n` and
//! nothing here compensates for it.
//!
//! # Usage
//! ```
//! use cofactor::Matrix;
//! let a = Matrix::from_rows(&[&[2.0, 0.0], &[0.0, 2.0]]).unwrap();
//! assert_eq!(a.determinant().unwrap(), 4.0);
//! let inv = a.inverse().unwrap();
//! assert_eq!(inv[(0, 0)], 0.5);
//! ```
//!
//! With the `rayon` feature the entries of the cofactor matrix are computed in parallel.

use crate::config::CompareOptions;
use crate::error::MatError;
use crate::matrix::Matrix;

/// `(-1)^k`
fn parity_sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

impl Matrix {
    fn require_square(&self) -> Result<(), MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> Result<f64, MatError> {
        self.require_square()?;
        log::debug!("determinant of {}x{} matrix", self.nrows(), self.ncols());
        self.expand_first_row()
    }

    // Caller guarantees the matrix is square.
    fn expand_first_row(&self) -> Result<f64, MatError> {
        let n = self.nrows();
        match n {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => {
                log::trace!("expanding {}x{} minor along row 0", n, n);
                let mut det = 0.0;
                for j in 0..n {
                    let a0j = self[(0, j)];
                    det += parity_sign(j) * a0j * self.minor(0, j)?.expand_first_row()?;
                }
                Ok(det)
            }
        }
    }

    /// Square with a determinant that is exactly non-zero.
    pub fn is_invertible(&self) -> bool {
        self.is_invertible_with(&CompareOptions::exact())
    }

    /// Square with `|det| > opts.zero_tol`.
    pub fn is_invertible_with(&self, opts: &CompareOptions) -> bool {
        match self.determinant() {
            Ok(det) => !opts.is_zero(det),
            Err(_) => false,
        }
    }

    fn cofactor_at(&self, i: usize, j: usize) -> Result<f64, MatError> {
        Ok(parity_sign(i + j) * self.minor(i, j)?.expand_first_row()?)
    }

    // Row-major cofactor entries of a square matrix with n >= 2.
    #[cfg_attr(feature = "rayon", allow(dead_code))]
    fn cofactor_entries_serial(&self) -> Result<Vec<f64>, MatError> {
        let n = self.nrows();
        (0..n * n).map(|k| self.cofactor_at(k / n, k % n)).collect()
    }

    #[cfg(feature = "rayon")]
    fn cofactor_entries_parallel(&self) -> Result<Vec<f64>, MatError> {
        use rayon::prelude::*;
        let n = self.nrows();
        (0..n * n)
            .into_par_iter()
            .map(|k| self.cofactor_at(k / n, k % n))
            .collect()
    }

    /// Matrix of cofactors: entry `(i, j)` is `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The cofactor matrix of a 1x1 matrix is `[[1]]`.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatError> {
        self.require_square()?;
        let n = self.nrows();
        log::debug!("cofactor matrix of {}x{} matrix", n, n);
        if n == 1 {
            return Matrix::filled(1, 1, 1.0);
        }

        #[cfg(feature = "rayon")]
        let data = self.cofactor_entries_parallel()?;
        #[cfg(not(feature = "rayon"))]
        let data = self.cofactor_entries_serial()?;

        Matrix::from_row_major(n, n, data)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix, MatError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// `adjugate / det`. Fails with `NotInvertible` for non-square or singular input.
    pub fn inverse(&self) -> Result<Matrix, MatError> {
        let det = match self.determinant() {
            Ok(det) => det,
            Err(MatError::NotSquare { .. }) => return Err(MatError::NotInvertible),
            Err(e) => return Err(e),
        };
        if det == 0.0 {
            log::debug!(
                "inverse requested for singular {}x{} matrix",
                self.nrows(),
                self.ncols()
            );
            return Err(MatError::NotInvertible);
        }
        Ok(self.adjugate()?.scale(1.0 / det))
    }
}
