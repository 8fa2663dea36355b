//! # Order Actor
//!
//! The order engine: stores placed orders and drives their status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and an [`OrderClient`]
//!
//! ## Checkout
//!
//! [`OrderClient::create_order`] turns a customer's cart into an order:
//!
//! 1. Save the delivery address and add it to the customer's addresses if it
//!    is a new location.
//! 2. Resolve the restaurant.
//! 3. Price the live cart. This total is what the customer pays.
//! 4. Copy every cart line into an order item.
//! 5. Create the order as `PENDING`; the actor queues it with the restaurant
//!    before storing it.
//!
//! The cart is left as it is.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{AddressClient, CartClient, OrderClient, RestaurantClient, UserClient};
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The client runs checkout, so it gets the clients checkout reads from. The
/// actor itself only needs a restaurant client, passed to `run()`.
pub fn new(
    buffer_size: usize,
    users: UserClient,
    addresses: AddressClient,
    restaurants: RestaurantClient,
    carts: CartClient,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client, users, addresses, restaurants, carts);
    (actor, client)
}
