//! Core error types used across the system

use thiserror::Error;

/// Failure of a single business-rule or format check.
///
/// Carries the name of the offending field along with a human-readable
/// message. Raised by entity setters and constructors, and by the
/// orchestration layer for business rules such as the duplicate-name check.
/// Always recoverable: the caller corrects the input and retries, and no
/// stored state is affected by the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field: String,
    /// Human-readable description of the violated rule
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error type surfaced by the orchestration layer.
///
/// Repository-level absence stays a boolean result; only the orchestration
/// layer promotes a missing entity to [`DomainError::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation(ValidationError::new(field, message))
    }

    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
