//! Error types for the Ingredient actor.

use crate::category_actor::CategoryError;
use crate::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngredientError {
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    #[error("Ingredient already exists: {0}")]
    AlreadyExists(String),

    #[error("Ingredient validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl IngredientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IngredientError::NotFound(_) => ErrorKind::NotFound,
            IngredientError::AlreadyExists(_) => ErrorKind::Conflict,
            IngredientError::ValidationError(_) => ErrorKind::InvalidArgument,
            IngredientError::Category(e) => e.kind(),
            IngredientError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
