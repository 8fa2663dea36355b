//! # Category Client
use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryKind, RestaurantId};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CategoryError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn for_restaurant(
        &self,
        restaurant_id: RestaurantId,
        kind: CategoryKind,
    ) -> Result<Vec<Category>, CategoryError> {
        self.list(Query::new("by_restaurant", move |c: &Category| {
            c.restaurant_id == restaurant_id && c.kind == kind
        }))
        .await
    }

    /// Fetches the category if it belongs to `restaurant_id` and groups
    /// `kind`. Any other category is `NotFound` from that restaurant's view.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        id: CategoryId,
        restaurant_id: RestaurantId,
        kind: CategoryKind,
    ) -> Result<Category, CategoryError> {
        let category = self.fetch(id).await?;
        if !category.admits(restaurant_id, kind) {
            debug!(%id, %restaurant_id, %kind, "Category belongs elsewhere");
            return Err(CategoryError::NotFound(id.to_string()));
        }
        Ok(category)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CategoryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CategoryError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => CategoryError::AlreadyExists(id),
            Err(other) => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
