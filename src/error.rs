//! Error type shared by the grid constructors and the filters.

use thiserror::Error;

pub type FilterResult<T> = Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Pixel count does not match `height * width`, or the product overflows.
    #[error("invalid dimensions: a {height}x{width} grid cannot hold {len} pixels")]
    InvalidDimensions {
        height: usize,
        width: usize,
        len: usize,
    },
    #[error("failed to allocate blur snapshot for a {height}x{width} grid")]
    AllocationFailure { height: usize, width: usize },
    #[error("RGB buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },
    #[error("expected 3 color channels, got {0}")]
    UnsupportedChannels(usize),
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
}
