//! Error types for the Category actor.

use crate::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// Unknown id, or a category of another restaurant or kind.
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category already exists: {0}")]
    AlreadyExists(String),

    #[error("Category validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CategoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CategoryError::NotFound(_) => ErrorKind::NotFound,
            CategoryError::AlreadyExists(_) => ErrorKind::Conflict,
            CategoryError::ValidationError(_) => ErrorKind::InvalidArgument,
            CategoryError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
