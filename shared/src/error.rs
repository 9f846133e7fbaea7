//! Domain errors raised by the pure computations in this crate

use thiserror::Error;

/// Errors produced while validating input or reading the forecast feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A forecast record lacks a required field or carries an unreadable one
    #[error("Malformed forecast entry: missing or invalid {field}")]
    MalformedFeed { field: &'static str },

    /// A user-supplied field failed validation
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
}

impl DomainError {
    pub fn malformed(field: &'static str) -> Self {
        Self::MalformedFeed { field }
    }

    pub fn validation(field: &'static str, message: &'static str) -> Self {
        Self::Validation { field, message }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::MalformedFeed { field } => field,
            DomainError::Validation { field, .. } => field,
        }
    }
}
