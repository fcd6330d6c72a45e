//! Comparison options for zero tests.
//!
//! The plain structural queries (`is_upper_triangular`, `is_invertible`, ...) compare
//! against `0.0` exactly. Computed matrices rarely produce exact zeros, so the
//! `*_with` variants take a `CompareOptions` carrying an absolute tolerance.

/// Absolute tolerance used when deciding whether a value is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// A value `v` counts as zero when `|v| <= zero_tol`.
    pub zero_tol: f64,
}

impl CompareOptions {
    /// Exact comparison against `0.0`.
    pub const fn exact() -> Self {
        Self { zero_tol: 0.0 }
    }

    /// Tolerance-based comparison. Negative tolerances are treated as their magnitude.
    pub fn with_tolerance(tol: f64) -> Self {
        Self { zero_tol: tol.abs() }
    }

    pub fn is_zero(&self, v: f64) -> bool {
        v.abs() <= self.zero_tol
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::exact()
    }
}
