//! # Food Client
use crate::food_actor::{FoodAction, FoodError};
use crate::model::{Food, FoodCreate, FoodFilter, FoodId, FoodUpdate, RestaurantId};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Food actor.
#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<Food>,
}

impl FoodClient {
    pub fn new(inner: ResourceClient<Food>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Food> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<Food> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<FoodError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => FoodError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => FoodError::AlreadyExists(id),
            Err(other) => FoodError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl FoodClient {
    #[instrument(skip(self))]
    pub async fn create_food(&self, params: FoodCreate) -> Result<Food, FoodError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_food(&self, id: FoodId, update: FoodUpdate) -> Result<Food, FoodError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// A restaurant's menu, narrowed by `filter`.
    #[instrument(skip(self))]
    pub async fn menu(
        &self,
        restaurant_id: RestaurantId,
        filter: FoodFilter,
    ) -> Result<Vec<Food>, FoodError> {
        self.list(Query::new("menu", move |f: &Food| {
            f.restaurant_id == restaurant_id && filter.matches(f)
        }))
        .await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> Result<Vec<Food>, FoodError> {
        let keyword = keyword.to_string();
        self.list(Query::new("search", move |f: &Food| f.matches_keyword(&keyword)))
            .await
    }

    /// Returns whether the food is now available.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: FoodId) -> Result<bool, FoodError> {
        self.inner
            .perform_action(id, FoodAction::ToggleAvailability)
            .await
            .map_err(Self::map_error)
    }
}
