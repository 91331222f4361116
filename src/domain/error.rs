//! Domain Layer - Errors
//!
//! Two failure classes reach the client: validation failures (bad table target,
//! malformed form) and storage failures.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Table name outside the allow-list
    #[error("Invalid table name: {0}")]
    InvalidTarget(String),

    /// Missing or unparseable request field, or an ambiguous delete selector
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Any failure reported by the persistence layer
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// True for client errors (HTTP 400), false for storage errors (HTTP 500)
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidTarget(_) | DomainError::MalformedRequest(_))
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
