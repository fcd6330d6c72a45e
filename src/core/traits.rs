//! Core shape and access traits for cofactor.

/// Row/column counts of a dense matrix.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// `(nrows, ncols)`
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Unchecked element read. Callers guarantee `i < nrows()` and `j < ncols()`.
pub trait MatrixGet<T> {
    fn at(&self, i: usize, j: usize) -> T;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}
