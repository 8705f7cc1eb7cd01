//! Error types for the bimodal explorer
//!
//! Provides a unified error type for all explorer crates.

use thiserror::Error;

/// Core error type for sampling, store construction and histogram queries
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed mixture, sample count, bin count or query range
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A search position fell outside the sorted buffer.
    ///
    /// Indicates a broken sortedness invariant; never user-recoverable.
    #[error("Index out of range: position {index} outside [0, {len}]")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO error (for configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an `InvalidParameters` error from any displayable message
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create an error for an empty sample set
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error was caused by caller-supplied parameters
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters(_))
    }
}
