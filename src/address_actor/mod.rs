//! # Address Actor
//!
//! The address store. Checkout persists the delivery address here before the
//! order is created; the order keeps its own copy of the record.

pub mod entity;
pub mod error;

pub use entity::AddressAction;
pub use error::*;

use crate::clients::AddressClient;
use crate::model::Address;
use actor_framework::ResourceActor;

/// Creates a new Address actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Address>, AddressClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AddressClient::new(generic_client))
}
