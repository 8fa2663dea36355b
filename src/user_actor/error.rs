//! Error types for the User actor.

use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The email is already registered.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::AlreadyExists(_) => ErrorKind::Conflict,
            UserError::ValidationError(_) => ErrorKind::InvalidArgument,
            UserError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
