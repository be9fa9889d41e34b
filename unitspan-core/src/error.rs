//! Error type for span operations

use thiserror::Error;

/// Error type for conversion and capability misuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// A unit name is not present in the conversion table
    #[error("unknown unit: {0}")]
    InvalidUnit(String),

    /// An argument is outside the contract (e.g. precision too large)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SpanError {
    pub fn invalid_unit(name: impl Into<String>) -> Self {
        SpanError::InvalidUnit(name.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SpanError::InvalidArgument(msg.into())
    }
}
