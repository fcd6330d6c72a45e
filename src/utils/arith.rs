//! Pairwise matrix arithmetic: sum, difference and product.
//!
//! The functions accept anything implementing [`MatShape`] + [`MatrixGet`], so a
//! [`Matrix`] can be combined with a `faer::Mat<f64>` directly. The result is always a
//! freshly allocated [`Matrix`].

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use crate::matrix::Matrix;

fn same_shape<A, B>(a: &A, b: &B) -> Result<(), MatError>
where
    A: MatShape + ?Sized,
    B: MatShape + ?Sized,
{
    if a.shape() != b.shape() {
        return Err(MatError::DimensionMismatch { left: a.shape(), right: b.shape() });
    }
    Ok(())
}

/// `C = A + B`, entrywise.
pub fn add<A, B>(a: &A, b: &B) -> Result<Matrix, MatError>
where
    A: MatShape + MatrixGet<f64> + ?Sized,
    B: MatShape + MatrixGet<f64> + ?Sized,
{
    same_shape(a, b)?;
    Matrix::from_fn(a.nrows(), a.ncols(), |i, j| a.at(i, j) + b.at(i, j))
}

/// `C = A - B`, entrywise.
pub fn subtract<A, B>(a: &A, b: &B) -> Result<Matrix, MatError>
where
    A: MatShape + MatrixGet<f64> + ?Sized,
    B: MatShape + MatrixGet<f64> + ?Sized,
{
    same_shape(a, b)?;
    Matrix::from_fn(a.nrows(), a.ncols(), |i, j| a.at(i, j) - b.at(i, j))
}

/// `C = A · B` by the naive triple loop. Requires `A.ncols == B.nrows`.
pub fn multiply<A, B>(a: &A, b: &B) -> Result<Matrix, MatError>
where
    A: MatShape + MatrixGet<f64> + ?Sized,
    B: MatShape + MatrixGet<f64> + ?Sized,
{
    if a.ncols() != b.nrows() {
        return Err(MatError::DimensionMismatch { left: a.shape(), right: b.shape() });
    }
    let inner = a.ncols();
    Matrix::from_fn(a.nrows(), b.ncols(), |i, j| {
        (0..inner).map(|k| a.at(i, k) * b.at(k, j)).sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_row_vectors() {
        let a = Matrix::from_rows(&[&[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[&[3.0, 4.0]]).unwrap();
        assert_eq!(add(&a, &b).unwrap(), Matrix::from_rows(&[&[4.0, 6.0]]).unwrap());
        assert_eq!(subtract(&b, &a).unwrap(), Matrix::from_rows(&[&[2.0, 2.0]]).unwrap());
    }

    #[test]
    fn mismatched_shapes_fail() {
        let a = Matrix::new(1, 2).unwrap();
        let b = Matrix::new(2, 1).unwrap();
        let err = MatError::DimensionMismatch { left: (1, 2), right: (2, 1) };
        assert_eq!(add(&a, &b), Err(err.clone()));
        assert_eq!(subtract(&a, &b), Err(err));
        let c = Matrix::new(3, 3).unwrap();
        assert_eq!(
            multiply(&a, &c),
            Err(MatError::DimensionMismatch { left: (1, 2), right: (3, 3) })
        );
    }

    #[test]
    fn multiply_rectangular() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c, Matrix::from_rows(&[&[58.0, 64.0], &[139.0, 154.0]]).unwrap());
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let a = Matrix::from_rows(&[&[1.0, -2.0, 3.5], &[0.0, 4.0, 6.0]]).unwrap();
        let i3 = Matrix::identity(3).unwrap();
        assert_eq!(multiply(&a, &i3).unwrap(), a);
        let i2 = Matrix::identity(2).unwrap();
        assert_eq!(multiply(&i2, &a).unwrap(), a);
    }

    #[test]
    fn mixes_with_faer() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let f = faer::Mat::<f64>::identity(2, 2);
        assert_eq!(multiply(&a, &f).unwrap(), a);
        let s = add(&f, &a).unwrap();
        assert_eq!(s.as_slice(), &[2.0, 2.0, 3.0, 5.0]);
    }
}
