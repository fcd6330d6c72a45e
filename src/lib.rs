//! cofactor: dense real matrices with cofactor-expansion determinant, adjugate and inverse.
//!
//! This crate provides a row-major `f64` [`Matrix`] with bounds-checked access,
//! structural transforms, in-place elementary row/column operations, and the
//! determinant → cofactor matrix → adjugate → inverse chain computed by Laplace
//! expansion. Pairwise sum, difference and product are free functions in [`utils`].
//!
//! ```
//! use cofactor::{Matrix, multiply};
//! let a = Matrix::from_rows(&[&[4.0, 7.0], &[2.0, 6.0]]).unwrap();
//! let inv = a.inverse().unwrap();
//! let id = multiply(&a, &inv).unwrap();
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use utils::*;
