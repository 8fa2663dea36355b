//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.
use crate::model::{Address, RestaurantId, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<UserError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => UserError::AlreadyExists(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Emails are matched exactly.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = email.to_string();
        let found = self
            .list(Query::new("by_email", move |u: &User| u.email == email))
            .await?;
        Ok(found.into_iter().next())
    }

    /// Adds `address` to the user's addresses unless one at the same location
    /// is already there. Returns whether it was added.
    #[instrument(skip(self, address), fields(address_id = %address.id))]
    pub async fn append_address_if_absent(
        &self,
        id: UserId,
        address: Address,
    ) -> Result<bool, UserError> {
        self.inner
            .perform_action(id, UserAction::AppendAddressIfAbsent(address))
            .await
            .map_err(Self::map_error)
    }

    /// Returns `true` when the restaurant is now a favorite.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<bool, UserError> {
        self.inner
            .perform_action(id, UserAction::ToggleFavorite(restaurant_id))
            .await
            .map_err(Self::map_error)
    }
}
