//! Error types for the Order actor.

use crate::address_actor::AddressError;
use crate::cart_actor::CartError;
use crate::error::ErrorKind;
use crate::model::OrderStatus;
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Checkout touches several actors; their failures are wrapped as-is so the
/// caller still sees which id did not resolve.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    /// The status literal is not one of the four known statuses.
    #[error("please select a valid order status")]
    InvalidStatus(String),

    #[error("Order cannot move from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::AlreadyExists(_) => ErrorKind::Conflict,
            OrderError::InvalidStatus(_) => ErrorKind::InvalidArgument,
            OrderError::IllegalTransition { .. } => ErrorKind::Conflict,
            OrderError::User(e) => e.kind(),
            OrderError::Address(e) => e.kind(),
            OrderError::Restaurant(e) => e.kind(),
            OrderError::Cart(e) => e.kind(),
            OrderError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
