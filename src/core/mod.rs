//! Core traits and their implementations for foreign matrix types.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatVec, MatrixGet};
