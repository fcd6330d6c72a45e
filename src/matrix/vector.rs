//! Column vector: a [`Matrix`] with exactly one column.
//!
//! `Vector` wraps a `Matrix` and derefs to it, so every read-only matrix operation is
//! available. Mutation goes through the forwarding methods below, which cannot change
//! the shape; `Vector` does not implement `DerefMut`.

use crate::error::MatError;
use crate::matrix::Matrix;
use std::fmt;
use std::ops::Deref;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    inner: Matrix,
}

impl Vector {
    /// Zero vector of `n` entries.
    pub fn new(n: usize) -> Result<Self, MatError> {
        Ok(Self { inner: Matrix::new(n, 1)? })
    }

    pub fn filled(n: usize, fill: f64) -> Result<Self, MatError> {
        Ok(Self { inner: Matrix::filled(n, 1, fill)? })
    }

    pub fn from_vec(data: Vec<f64>) -> Result<Self, MatError> {
        let n = data.len();
        Ok(Self { inner: Matrix::from_row_major(n, 1, data)? })
    }

    /// Number of entries.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.inner.nrows()
    }

    pub fn entry(&self, i: usize) -> Result<f64, MatError> {
        self.inner.get(i, 0)
    }

    pub fn set_entry(&mut self, i: usize, value: f64) -> Result<(), MatError> {
        self.inner.set(i, 0, value)
    }

    // Shape-preserving in-place operations, forwarded to the inner matrix.

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatError> {
        self.inner.set(i, j, value)
    }

    pub fn add_scalar(&mut self, value: f64) {
        self.inner.add_scalar(value)
    }

    pub fn scale_row(&mut self, i: usize, value: f64) -> Result<(), MatError> {
        self.inner.scale_row(i, value)
    }

    pub fn scale_col(&mut self, j: usize, value: f64) -> Result<(), MatError> {
        self.inner.scale_col(j, value)
    }

    pub fn add_row_into(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.inner.add_row_into(src, dst)
    }

    pub fn add_col_into(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.inner.add_col_into(src, dst)
    }

    pub fn subtract_row_from(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.inner.subtract_row_from(src, dst)
    }

    pub fn subtract_col_from(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.inner.subtract_col_from(src, dst)
    }

    pub fn into_matrix(self) -> Matrix {
        self.inner
    }
}

impl Deref for Vector {
    type Target = Matrix;

    fn deref(&self) -> &Matrix {
        &self.inner
    }
}


impl TryFrom<Matrix> for Vector {
    type Error = MatError;

    fn try_from(m: Matrix) -> Result<Self, MatError> {
        if m.ncols() != 1 {
            return Err(MatError::DimensionMismatch {
                left: (m.nrows(), m.ncols()),
                right: (m.nrows(), 1),
            });
        }
        Ok(Self { inner: m })
    }
}

impl From<Vector> for Matrix {
    fn from(v: Vector) -> Matrix {
        v.inner
    }
}

/// One line per entry: `(v)`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.inner.as_slice() {
            writeln!(f, "({})", v)?;
        }
        Ok(())
    }
}
