//! Top-level error type and the error kinds callers branch on.

use crate::address_actor::AddressError;
use crate::cart_actor::CartError;
use crate::category_actor::CategoryError;
use crate::food_actor::FoodError;
use crate::identity::AuthError;
use crate::ingredient_actor::IngredientError;
use crate::order_actor::OrderError;
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use std::fmt::{self, Display};
use thiserror::Error;

/// The category of a failure, independent of which component raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced id does not resolve.
    NotFound,
    /// The request itself is malformed or names an unknown literal.
    InvalidArgument,
    /// The credential is missing, malformed, badly signed or expired.
    Unauthenticated,
    /// The caller is known but may not do this.
    Forbidden,
    /// The request collides with existing state.
    Conflict,
    /// An actor is gone.
    Unavailable,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

/// Any failure surfaced by [`FoodyApi`](crate::api::FoodyApi).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodyError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Food(#[from] FoodError),

    #[error(transparent)]
    Ingredient(#[from] IngredientError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl FoodyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FoodyError::Auth(e) => e.kind(),
            FoodyError::User(e) => e.kind(),
            FoodyError::Address(e) => e.kind(),
            FoodyError::Restaurant(e) => e.kind(),
            FoodyError::Food(e) => e.kind(),
            FoodyError::Ingredient(e) => e.kind(),
            FoodyError::Category(e) => e.kind(),
            FoodyError::Cart(e) => e.kind(),
            FoodyError::Order(e) => e.kind(),
            FoodyError::Forbidden(_) => ErrorKind::Forbidden,
        }
    }
}
