//! # Restaurant Client
//!
//! CRUD and search for restaurants, plus the order-queue actions used by the
//! order actor.
use crate::model::{OrderId, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate, UserId};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => RestaurantError::AlreadyExists(id),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl RestaurantClient {
    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Every restaurant, in registration order.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        self.list(Query::new("all", |_: &Restaurant| true)).await
    }

    /// Restaurants whose name, description or cuisine contains `keyword`,
    /// ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        let keyword = keyword.to_string();
        self.list(Query::new("search", move |r: &Restaurant| r.matches_keyword(&keyword)))
            .await
    }

    /// The first restaurant registered by `owner_id`.
    #[instrument(skip(self))]
    pub async fn find_by_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Option<Restaurant>, RestaurantError> {
        let owned = self
            .list(Query::new("by_owner", move |r: &Restaurant| r.owner_id == owner_id))
            .await?;
        Ok(owned.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn append_order(
        &self,
        id: RestaurantId,
        order_id: OrderId,
    ) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::AppendOrder(order_id))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_order(
        &self,
        id: RestaurantId,
        order_id: OrderId,
    ) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::RemoveOrder(order_id))
            .await
            .map_err(Self::map_error)
    }

    /// Returns whether the restaurant is now open.
    #[instrument(skip(self))]
    pub async fn toggle_open(&self, id: RestaurantId) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::ToggleOpen)
            .await
            .map_err(Self::map_error)
    }
}
