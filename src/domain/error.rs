use thiserror::Error;

/// Errors raised by grid construction and cell addressing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions {rows}x{cols} must both be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}
