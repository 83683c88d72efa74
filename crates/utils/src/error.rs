// ABOUTME: Error types for delay string parsing.
// ABOUTME: Provides DelayError with InvalidFormat and OutOfRange variants.

use thiserror::Error;

/// Errors that can occur while parsing a delay string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelayError {
    /// The input could not be split into a magnitude and a known unit.
    #[error("invalid delay format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// The delay is well formed but does not fit in a u64 millisecond count.
    #[error("delay {input:?} is too large")]
    OutOfRange { input: String },
}

impl DelayError {
    /// Creates an InvalidFormat error for the given raw input.
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        DelayError::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(input: impl Into<String>) -> Self {
        DelayError::OutOfRange {
            input: input.into(),
        }
    }

    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            DelayError::InvalidFormat { input, .. } | DelayError::OutOfRange { input } => input,
        }
    }

    /// Returns true if this is an InvalidFormat error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, DelayError::InvalidFormat { .. })
    }

    /// Returns true if this is an OutOfRange error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DelayError::OutOfRange { .. })
    }
}
