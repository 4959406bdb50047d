//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn repository<T: Into<String>>(message: T) -> Self {
        Self::Repository(message.into())
    }

    /// Message suitable for showing inline in a form, without the error kind prefix
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::NotFound(m)
            | DomainError::Validation(m)
            | DomainError::Repository(m)
            | DomainError::Unauthorized(m) => m,
        }
    }
}
