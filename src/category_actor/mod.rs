//! # Category Actor
//!
//! Food categories and ingredient categories, each owned by one restaurant.
//! Foods and ingredients refer to them by id.

pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::model::{Category, CategoryCreate, CategoryId};
use actor_framework::{ActorEntity, ResourceActor};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            kind: params.kind,
            name: name.to_string(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}
