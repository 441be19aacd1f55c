use std::error::Error;
use std::fmt;

/// Custom error type for exercise operations that can be misused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// A strided overwrite was requested with stride zero.
    ZeroStride,
    /// A block extraction reached past the source array.
    BlockOutOfBounds {
        row_end: usize,
        col_end: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrillError::ZeroStride => write!(f, "overwrite stride must be non-zero"),
            DrillError::BlockOutOfBounds {
                row_end,
                col_end,
                nrows,
                ncols,
            } => write!(
                f,
                "block ending at ({}, {}) exceeds source of shape ({}, {})",
                row_end, col_end, nrows, ncols
            ),
        }
    }
}

impl Error for DrillError {}
