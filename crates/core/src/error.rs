//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, conflicts). None of these are transient, so callers never retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A source value failed validation (e.g. yield outside 0..=100).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty part number).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested key does not exist. Carries the key exactly as requested.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. duplicate key while loading).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for the lookup-miss case; the only error a read path can produce.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
