//! Free-function matrix arithmetic.

pub mod arith;
pub use arith::{add, multiply, subtract};
