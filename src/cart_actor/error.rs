//! Error types for the Cart actor.

use crate::error::ErrorKind;
use crate::food_actor::FoodError;
use crate::model::{CartItemId, PriceOverflow};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The customer has no cart.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The customer already has a cart.
    #[error("Cart already exists: {0}")]
    AlreadyExists(String),

    /// No line with this id in the caller's cart.
    #[error("Cart item not found: {0}")]
    ItemNotFound(CartItemId),

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("Quantity of {0} is too large")]
    QuantityOverflow(CartItemId),

    /// A subtotal or the total does not fit in an amount.
    #[error("Cart amount out of range")]
    PriceOverflow(#[from] PriceOverflow),

    /// The catalog lookup failed, typically an unknown food id.
    #[error(transparent)]
    Food(#[from] FoodError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::NotFound(_) | CartError::ItemNotFound(_) => ErrorKind::NotFound,
            CartError::AlreadyExists(_) => ErrorKind::Conflict,
            CartError::InvalidQuantity(_)
            | CartError::QuantityOverflow(_)
            | CartError::PriceOverflow(_) => ErrorKind::InvalidArgument,
            CartError::Food(e) => e.kind(),
            CartError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
