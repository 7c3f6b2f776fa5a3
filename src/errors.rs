//! Errors for conversions from raw bytes
#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("cell byte out of range, expected 0..=9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice does not contain exactly 81 cells
    #[error("expected a slice of 81 cells, found {0}")]
    WrongLength(usize),
    /// Slice contains entries outside `0..=9`
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}
