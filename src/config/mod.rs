//! Configuration for comparison-sensitive matrix queries.

pub mod options;
pub use options::CompareOptions;
