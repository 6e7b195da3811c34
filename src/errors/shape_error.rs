use thiserror::Error;

/// Raised by matrix primitives when operand dimensions are incompatible.
///
/// `left` and `right` are `(rows, cols)` of the two operands as they were
/// handed to `op`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Matrix rows must be non-empty and of equal length")]
    RaggedData,

    #[error("Matrix chain needs at least two non-zero dimensions, got {dims:?}")]
    InvalidChain { dims: Vec<usize> },
}
