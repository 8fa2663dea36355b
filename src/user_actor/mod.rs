//! # User Actor
//!
//! Owns the registered users, their saved addresses and their favorite
//! restaurants.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`]: address dedup and favorite toggling
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use foody_orders::user_actor;
//! use foody_orders::model::{Role, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client
//!         .create_user(UserCreate {
//!             full_name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!             role: Role::Customer,
//!         })
//!         .await?;
//!     assert_eq!(client.find_by_email("alice@example.com").await?, Some(user));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
