use thiserror::Error;

use crate::shared::validations::FieldErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// One or more form fields failed their rules; nothing was mutated.
    #[error("Invalid form: {0}")]
    InvalidFields(FieldErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DomainError {
    /// Field-level messages when this is a form rejection.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DomainError::InvalidFields(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
