//! Error types for the Restaurant actor.

use crate::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error("Restaurant already exists: {0}")]
    AlreadyExists(String),

    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RestaurantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestaurantError::NotFound(_) => ErrorKind::NotFound,
            RestaurantError::AlreadyExists(_) => ErrorKind::Conflict,
            RestaurantError::ValidationError(_) => ErrorKind::InvalidArgument,
            RestaurantError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
