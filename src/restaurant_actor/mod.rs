//! # Restaurant Actor
//!
//! The restaurant part of the catalog. Besides CRUD it keeps each restaurant's
//! incoming-order queue, which the order actor appends to and removes from.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Restaurant`]
//! - [`actions`] - [`RestaurantAction`]
//! - [`error`] - [`RestaurantError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::model::Restaurant;
use actor_framework::ResourceActor;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
