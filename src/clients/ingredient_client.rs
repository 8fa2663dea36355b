//! # Ingredient Client
use crate::ingredient_actor::{IngredientAction, IngredientError};
use crate::model::{IngredientCreate, IngredientId, IngredientItem, RestaurantId};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the Ingredient actor.
#[derive(Clone)]
pub struct IngredientClient {
    inner: ResourceClient<IngredientItem>,
}

impl IngredientClient {
    pub fn new(inner: ResourceClient<IngredientItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_ingredient(
        &self,
        params: IngredientCreate,
    ) -> Result<IngredientItem, IngredientError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<IngredientItem>, IngredientError> {
        self.list(Query::new("by_restaurant", move |i: &IngredientItem| {
            i.restaurant_id == restaurant_id
        }))
        .await
    }

    /// Returns whether the ingredient is now in stock.
    #[instrument(skip(self))]
    pub async fn toggle_stock(&self, id: IngredientId) -> Result<bool, IngredientError> {
        self.inner
            .perform_action(id, IngredientAction::ToggleStock)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<IngredientItem> for IngredientClient {
    type Error = IngredientError;

    fn inner(&self) -> &ResourceClient<IngredientItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<IngredientError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => IngredientError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => IngredientError::AlreadyExists(id),
            Err(other) => IngredientError::ActorCommunicationError(other.to_string()),
        }
    }
}
