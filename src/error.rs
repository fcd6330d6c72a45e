use thiserror::Error;

// Unified error type for cofactor

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid dimension {rows}x{cols}: need at least one row and one column")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },
    #[error("rows {r0}..{r1}, cols {c0}..{c1} do not form a submatrix of a {rows}x{cols} matrix")]
    InvalidRange {
        r0: usize,
        c0: usize,
        r1: usize,
        c1: usize,
        rows: usize,
        cols: usize,
    },
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not invertible")]
    NotInvertible,
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl MatError {
    pub(crate) fn row(index: usize, len: usize) -> Self {
        MatError::IndexOutOfRange { axis: "row", index, len }
    }

    pub(crate) fn col(index: usize, len: usize) -> Self {
        MatError::IndexOutOfRange { axis: "column", index, len }
    }
}
