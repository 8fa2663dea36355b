//! # Actor Framework
//!
//! Building blocks for type-safe actor systems on tokio. Each resource type
//! (a user, a cart, an order) is owned by one [`ResourceActor`] task that
//! processes requests one at a time, and is reached through a cloneable
//! [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain model plus its hooks and actions
//! 2. **Runtime** ([`ResourceActor`]): the mailbox loop and the in-memory store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/reply
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, Query, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Menu {
//!     id: u32,
//!     title: String,
//!     dishes: Vec<String>,
//! }
//!
//! #[derive(Debug)] struct MenuCreate { title: String }
//! #[derive(Debug)] struct MenuUpdate { title: Option<String> }
//! #[derive(Debug)] enum MenuAction { AddDish(String) }
//! #[derive(Debug, thiserror::Error)]
//! enum MenuError {
//!     #[error("dish already on the menu: {0}")]
//!     Duplicate(String),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Menu {
//!     type Id = u32;
//!     type Create = MenuCreate;
//!     type Update = MenuUpdate;
//!     type Action = MenuAction;
//!     type ActionResult = usize;
//!     type Context = ();
//!     type Error = MenuError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: MenuCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.title, dishes: Vec::new() })
//!     }
//!
//!     async fn on_update(&mut self, update: MenuUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(title) = update.title { self.title = title; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<usize, Self::Error> {
//!         match action {
//!             MenuAction::AddDish(dish) if self.dishes.contains(&dish) => Err(MenuError::Duplicate(dish)),
//!             MenuAction::AddDish(dish) => {
//!                 self.dishes.push(dish);
//!                 Ok(self.dishes.len())
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Menu>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let menu = client.create(MenuCreate { title: "Lunch".into() }).await.unwrap();
//!     let count = client.perform_action(menu.id, MenuAction::AddDish("Pho".into())).await.unwrap();
//!     assert_eq!(count, 1);
//!
//!     // A failed action leaves the stored menu unchanged
//!     assert!(client.perform_action(menu.id, MenuAction::AddDish("Pho".into())).await.is_err());
//!
//!     let lunch = client.list(Query::new("lunch", |m: &Menu| m.title == "Lunch")).await.unwrap();
//!     assert_eq!(lunch[0].dishes, vec!["Pho".to_string()]);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to `new()`. Every
//! actor and client can be created first and wired afterwards, so an order
//! actor can hold a restaurant client without a construction-order cycle.
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests without spawning actors, either
//! from queued expectations ([`mock::MockClient`]) or from a receiver the test
//! drives itself ([`mock::create_mock_client`]).

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Query, ResourceRequest, Response};
