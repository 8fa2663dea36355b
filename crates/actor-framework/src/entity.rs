//! # ActorEntity Trait
//!
//! The contract every resource (user, restaurant, cart, order, ...) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). It names the
//! payload types for each CRUD operation plus a custom `Action`, the context the
//! actor is started with, and the lifecycle hooks the actor calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::natural_id`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing. A failing hook aborts the request and the store is
//! left as it was.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` is handed to
/// `run()` rather than `new()`, which lets actors be created first and wired
/// together afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so
    /// that listings come back in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. Clients recover it with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id the entity was stored under.
    fn id(&self) -> &Self::Id;

    /// A key derived from the create payload instead of the id counter.
    ///
    /// When this returns `Some`, the actor stores the entity under that key and
    /// rejects a second create for the same key with `AlreadyExists`.
    fn natural_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
