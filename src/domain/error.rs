//! Error types for universe construction and addressing.
//!
//! Every failing operation leaves the universe exactly as it was; errors
//! are deterministic functions of the caller's input.

use thiserror::Error;

/// Errors returned by [`Universe`](super::Universe) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseError {
    /// Zero width/height, or a cell count that does not fit in memory
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// Direct addressing outside the grid (never wraps)
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for universe operations.
pub type Result<T> = std::result::Result<T, UniverseError>;
