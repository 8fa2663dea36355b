//! Error types for the Food actor.

use crate::category_actor::CategoryError;
use crate::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    #[error("Food not found: {0}")]
    NotFound(String),

    #[error("Food already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Food validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl FoodError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FoodError::NotFound(_) => ErrorKind::NotFound,
            FoodError::AlreadyExists(_) => ErrorKind::Conflict,
            FoodError::InvalidPrice(_) | FoodError::ValidationError(_) => {
                ErrorKind::InvalidArgument
            }
            FoodError::Category(e) => e.kind(),
            FoodError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
