//! Matrix module: the dense `Matrix`, its single-column `Vector` form, and the
//! cofactor-expansion algorithms.

pub mod dense;
pub use dense::Matrix;
pub mod cofactor;
pub mod structure;
pub use structure::Structure;
pub mod vector;
pub use vector::Vector;
