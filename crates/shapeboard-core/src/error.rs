//! Error types for board operations.

use thiserror::Error;

/// Errors raised by the board when a precondition does not hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("Container is not mounted")]
    NotMounted,
    #[error("Invalid container size: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },
    #[error("Invalid size ratios: min {min}, max {max}")]
    InvalidConfig { min: f64, max: f64 },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
