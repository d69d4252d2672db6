//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and store layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `NotFound` is the only failure a well-formed request can hit in the default
/// configuration. `Validation` is only produced when the catalog runs with
/// strict collection tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested record does not exist.
    #[error("not found")]
    NotFound,

    /// A value failed validation (e.g. unknown collection tag in strict mode).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A store could not be accessed (lock poisoned by a panicking writer).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
