//! Dense row-major matrix of `f64`.
//!
//! This module provides the `Matrix` type: construction, bounds-checked element access,
//! structural transforms (submatrix, row, column, transpose, minor) and in-place
//! elementary row/column operations. Shape is fixed at construction; every operation
//! that changes shape returns a freshly allocated matrix.
//!
//! Determinant, cofactor matrix, adjugate and inverse live in [`super::cofactor`].

use crate::config::CompareOptions;
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of entries for a `rows × cols` matrix. Fails with `InvalidDimension` for an
/// empty shape or one whose storage would not fit in memory.
fn storage_len(rows: usize, cols: usize) -> Result<usize, MatError> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 && len <= isize::MAX as usize / size_of::<f64>() => Ok(len),
        _ => Err(MatError::InvalidDimension { rows, cols }),
    }
}

/// Dense `rows × cols` matrix, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a `rows × cols` matrix with every entry set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: f64) -> Result<Self, MatError> {
        let len = storage_len(rows, cols)?;
        Ok(Self { rows, cols, data: vec![fill; len] })
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self, MatError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Build a matrix whose `(i, j)` entry is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                m.data[i * cols + j] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatError> {
        if data.len() != storage_len(rows, cols)? {
            return Err(MatError::DimensionMismatch {
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Construct from a slice of equally long rows.
    ///
    /// ```
    /// use cofactor::Matrix;
    /// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(a.get(1, 0).unwrap(), 3.0);
    /// ```
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MatError> {
        let cols = rows.first().map_or(0, |r| r.len());
        if rows.is_empty() || cols == 0 {
            return Err(MatError::InvalidDimension { rows: rows.len(), cols });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for r in rows {
            if r.len() != cols {
                return Err(MatError::DimensionMismatch {
                    left: (1, cols),
                    right: (1, r.len()),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn row_slice(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn check_row(&self, i: usize) -> Result<(), MatError> {
        if i >= self.rows {
            return Err(MatError::row(i, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<(), MatError> {
        if j >= self.cols {
            return Err(MatError::col(j, self.cols));
        }
        Ok(())
    }

    /// Entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(self.data[i * self.cols + j])
    }

    /// Overwrite entry `(i, j)` with `value`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatError> {
        self.check_row(i)?;
        self.check_col(j)?;
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Add `value` to every entry, in place. Pass a negative value to subtract.
    pub fn add_scalar(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x += value);
    }

    /// Return a new matrix with every entry multiplied by `value`.
    pub fn scale(&self, value: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| x * value).collect(),
        }
    }

    /// Copy of the half-open rectangle `[r0, r1) × [c0, c1)`.
    ///
    /// Fails with `InvalidRange` when the rectangle is empty or reaches past the
    /// last row or column.
    pub fn submatrix(
        &self,
        r0: usize,
        c0: usize,
        r1: usize,
        c1: usize,
    ) -> Result<Matrix, MatError> {
        if r0 >= r1 || c0 >= c1 || r1 > self.rows || c1 > self.cols {
            return Err(MatError::InvalidRange {
                r0,
                c0,
                r1,
                c1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cols = c1 - c0;
        let mut data = Vec::with_capacity((r1 - r0) * cols);
        for i in r0..r1 {
            data.extend_from_slice(&self.row_slice(i)[c0..c1]);
        }
        Ok(Matrix { rows: r1 - r0, cols, data })
    }

    /// Row `i` as a `1 × cols` matrix.
    pub fn row(&self, i: usize) -> Result<Matrix, MatError> {
        self.check_row(i)?;
        Ok(Matrix {
            rows: 1,
            cols: self.cols,
            data: self.row_slice(i).to_vec(),
        })
    }

    /// Column `j` as a `rows × 1` matrix.
    pub fn column(&self, j: usize) -> Result<Matrix, MatError> {
        self.check_col(j)?;
        Ok(Matrix {
            rows: self.rows,
            cols: 1,
            data: (0..self.rows).map(|i| self.data[i * self.cols + j]).collect(),
        })
    }

    /// `cols × rows` matrix with `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    /// The matrix with row `i` and column `j` removed.
    ///
    /// A matrix with a single row or column has no minor; that case fails with
    /// `InvalidDimension`.
    pub fn minor(&self, i: usize, j: usize) -> Result<Matrix, MatError> {
        self.check_row(i)?;
        self.check_col(j)?;
        if self.rows == 1 || self.cols == 1 {
            return Err(MatError::InvalidDimension {
                rows: self.rows - 1,
                cols: self.cols - 1,
            });
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for (ii, row) in self.data.chunks_exact(self.cols).enumerate() {
            if ii == i {
                continue;
            }
            data.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(jj, _)| jj != j)
                    .map(|(_, &v)| v),
            );
        }
        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Square with every entry strictly below the diagonal exactly `0.0`.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_upper_triangular_with(&CompareOptions::exact())
    }

    /// Square with every entry strictly above the diagonal exactly `0.0`.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_lower_triangular_with(&CompareOptions::exact())
    }

    pub fn is_upper_triangular_with(&self, opts: &CompareOptions) -> bool {
        self.is_square()
            && (1..self.rows).all(|i| self.row_slice(i)[..i].iter().all(|&v| opts.is_zero(v)))
    }

    pub fn is_lower_triangular_with(&self, opts: &CompareOptions) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| self.row_slice(i)[i + 1..].iter().all(|&v| opts.is_zero(v)))
    }

    /// Entrywise comparison: same shape and `|a - b| <= opts.zero_tol` everywhere.
    pub fn approx_eq(&self, other: &Matrix, opts: &CompareOptions) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| opts.is_zero(a - b))
    }

    // Elementary row/column operations. Every index is validated before the first write.

    /// Multiply row `i` by `value`, in place.
    pub fn scale_row(&mut self, i: usize, value: f64) -> Result<(), MatError> {
        self.check_row(i)?;
        let cols = self.cols;
        self.data[i * cols..(i + 1) * cols]
            .iter_mut()
            .for_each(|x| *x *= value);
        Ok(())
    }

    /// Multiply column `j` by `value`, in place.
    pub fn scale_col(&mut self, j: usize, value: f64) -> Result<(), MatError> {
        self.check_col(j)?;
        for i in 0..self.rows {
            self.data[i * self.cols + j] *= value;
        }
        Ok(())
    }

    /// `row[dst] += row[src]`
    pub fn add_row_into(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.row_axpy(src, dst, 1.0)
    }

    /// `col[dst] += col[src]`
    pub fn add_col_into(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.col_axpy(src, dst, 1.0)
    }

    /// `row[dst] -= row[src]`
    pub fn subtract_row_from(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.row_axpy(src, dst, -1.0)
    }

    /// `col[dst] -= col[src]`
    pub fn subtract_col_from(&mut self, src: usize, dst: usize) -> Result<(), MatError> {
        self.col_axpy(src, dst, -1.0)
    }

    fn row_axpy(&mut self, src: usize, dst: usize, alpha: f64) -> Result<(), MatError> {
        self.check_row(src)?;
        self.check_row(dst)?;
        let cols = self.cols;
        for k in 0..cols {
            let s = self.data[src * cols + k];
            self.data[dst * cols + k] += alpha * s;
        }
        Ok(())
    }

    fn col_axpy(&mut self, src: usize, dst: usize, alpha: f64) -> Result<(), MatError> {
        self.check_col(src)?;
        self.check_col(dst)?;
        for i in 0..self.rows {
            let base = i * self.cols;
            let s = self.data[base + src];
            self.data[base + dst] += alpha * s;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panics if `(i, j)` is out of bounds; use [`Matrix::get`] for a checked read.
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl MatrixGet<f64> for Matrix {
    fn at(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

/// One line per row: `(v0, v1, ..., vk)`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            write!(f, "(")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
