//! Domain error model.

use thiserror::Error;

/// Result type used across the directory and its callers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A missing record is not an error: the directory reports it as
/// `Option::None` / `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied an absent or unusable payload.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier was malformed or out of range. Carries the offending
    /// text exactly as received.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unexpected failure (poisoned lock, exhausted id space, ...).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId(raw.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
