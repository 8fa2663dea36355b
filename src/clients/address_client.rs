//! # Address Client
use crate::address_actor::AddressError;
use crate::model::{Address, DeliveryAddress};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }

    /// Persists a fresh address record.
    #[instrument(skip(self, details), fields(city = %details.city))]
    pub async fn save_address(&self, details: DeliveryAddress) -> Result<Address, AddressError> {
        self.inner.create(details).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Address> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<AddressError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => AddressError::NotFound(id),
            Err(other) => AddressError::ActorCommunicationError(other.to_string()),
        }
    }
}
