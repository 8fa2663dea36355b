//! # Cart Actor
//!
//! One live cart per customer, stored under the customer's id. The actor
//! handles one request at a time, so read-merge-write on a cart's lines never
//! interleaves with another request for the same cart.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor needs the food catalog, so it is started with a
//! [`FoodClient`](crate::clients::FoodClient):
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(food_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
