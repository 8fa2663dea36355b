//! Error types for the Address actor.

use crate::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(String),

    /// A required field is blank.
    #[error("Incomplete address: {0} is required")]
    Incomplete(&'static str),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::NotFound(_) => ErrorKind::NotFound,
            AddressError::Incomplete(_) => ErrorKind::InvalidArgument,
            AddressError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
