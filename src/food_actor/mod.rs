//! # Food Actor
//!
//! Menu items. The cart actor reads prices from here when a line is added and
//! every time a cart is priced. Runs with a category client as context.

pub mod entity;
pub mod error;

pub use entity::FoodAction;
pub use error::*;

use crate::clients::FoodClient;
use crate::model::Food;
use actor_framework::ResourceActor;

/// Creates a new Food actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Food>, FoodClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, FoodClient::new(generic_client))
}
