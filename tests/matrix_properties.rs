//! Property-style tests for construction, transposition, determinant and inverse.
//!
//! Random inputs come from `rand`; diagonally dominant matrices are used wherever an
//! invertible matrix is required so that the cofactor inverse stays well conditioned.

use approx::assert_abs_diff_eq;
use cofactor::{CompareOptions, MatError, Matrix, Vector, add, multiply, subtract};
use rand::Rng;

fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0..1.0)).unwrap()
}

/// Random `n x n` matrix with `n + 1` added to the diagonal.
fn random_dominant(n: usize) -> Matrix {
    let mut a = random_matrix(n, n);
    for i in 0..n {
        a[(i, i)] += n as f64 + 1.0;
    }
    a
}

#[test]
fn fresh_matrix_holds_fill_value() {
    for rows in 1..5 {
        for cols in 1..5 {
            let a = Matrix::filled(rows, cols, 3.25).unwrap();
            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(a.get(i, j).unwrap(), 3.25);
                }
            }
            assert!(Matrix::new(rows, cols).unwrap().as_slice().iter().all(|&v| v == 0.0));
        }
    }
}

#[test]
fn out_of_bounds_access_fails_for_every_size() {
    for n in 1..6 {
        let a = Matrix::new(n, n).unwrap();
        assert!(matches!(a.get(n, 0), Err(MatError::IndexOutOfRange { .. })));
        assert!(matches!(a.get(0, n), Err(MatError::IndexOutOfRange { .. })));
    }
}

#[test]
fn transpose_is_an_involution() {
    for (r, c) in [(1, 1), (1, 4), (3, 2), (5, 5)] {
        let a = random_matrix(r, c);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    for n in 1..=5 {
        let a = random_dominant(n);
        assert!(a.is_invertible());
        let inv = a.inverse().unwrap();
        let prod = multiply(&a, &inv).unwrap();
        let id = Matrix::identity(n).unwrap();
        assert!(
            prod.approx_eq(&id, &CompareOptions::with_tolerance(1e-10)),
            "A * A^-1 deviates from I for n = {}:\n{}",
            n,
            prod
        );
    }
}

#[test]
fn zero_determinant_means_not_invertible() {
    // Duplicate a row of a random matrix.
    let mut a = random_matrix(4, 4);
    for j in 0..4 {
        let v = a[(0, j)];
        a.set(2, j, v).unwrap();
    }
    a.subtract_row_from(0, 2).unwrap();
    assert_eq!(a.row(2).unwrap().as_slice(), &[0.0; 4]);
    assert_eq!(a.determinant().unwrap(), 0.0);
    assert!(!a.is_invertible());
    assert_eq!(a.inverse(), Err(MatError::NotInvertible));
}

#[test]
fn determinant_is_multiplicative() {
    let a = random_dominant(4);
    let b = random_dominant(4);
    let ab = multiply(&a, &b).unwrap();
    let lhs = ab.determinant().unwrap();
    let rhs = a.determinant().unwrap() * b.determinant().unwrap();
    assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-8 * rhs.abs().max(1.0));
}

#[test]
fn determinant_of_triangular_is_diagonal_product() {
    let mut a = random_matrix(5, 5);
    for i in 0..5 {
        for j in 0..i {
            a.set(i, j, 0.0).unwrap();
        }
    }
    assert!(a.is_upper_triangular());
    let diag: f64 = (0..5).map(|i| a[(i, i)]).product();
    assert_abs_diff_eq!(a.determinant().unwrap(), diag, epsilon = 1e-12);
}

#[test]
fn row_operations_preserve_determinant() {
    let a = random_dominant(4);
    let det = a.determinant().unwrap();
    let mut b = a.clone();
    b.add_row_into(1, 3).unwrap();
    b.subtract_col_from(0, 2).unwrap();
    assert_abs_diff_eq!(b.determinant().unwrap(), det, epsilon = 1e-9);
    b.scale_row(0, 2.0).unwrap();
    assert_abs_diff_eq!(b.determinant().unwrap(), 2.0 * det, epsilon = 1e-9);
}

#[test]
fn add_then_subtract_round_trips() {
    let a = random_matrix(3, 4);
    let b = random_matrix(3, 4);
    let back = subtract(&add(&a, &b).unwrap(), &b).unwrap();
    assert!(back.approx_eq(&a, &CompareOptions::with_tolerance(1e-12)));
}

#[test]
fn adjugate_identity() {
    // A * adj(A) == det(A) * I
    let a = random_dominant(3);
    let lhs = multiply(&a, &a.adjugate().unwrap()).unwrap();
    let rhs = Matrix::identity(3).unwrap().scale(a.determinant().unwrap());
    assert!(lhs.approx_eq(&rhs, &CompareOptions::with_tolerance(1e-9)));
}

#[test]
fn matrix_times_vector() {
    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    let x = Vector::from_vec(vec![1.0, 1.0]).unwrap();
    let y = Vector::try_from(multiply(&a, &*x).unwrap()).unwrap();
    assert_eq!(y.entry(0).unwrap(), 3.0);
    assert_eq!(y.entry(1).unwrap(), 7.0);
}
