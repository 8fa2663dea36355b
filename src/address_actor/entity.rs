//! [`ActorEntity`] implementation for [`Address`].

use super::error::AddressError;
use crate::model::{Address, AddressId, DeliveryAddress};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Addresses have no actions.
#[derive(Debug, Clone)]
pub enum AddressAction {}

fn validate(details: &DeliveryAddress) -> Result<(), AddressError> {
    let required = [
        ("street", &details.street),
        ("city", &details.city),
        ("country", &details.country),
    ];
    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(AddressError::Incomplete(*field)),
        None => Ok(()),
    }
}

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = DeliveryAddress;
    type Update = DeliveryAddress;
    type Action = AddressAction;
    type ActionResult = ();
    type Context = ();
    type Error = AddressError;

    fn id(&self) -> &AddressId {
        &self.id
    }

    /// Every save is a fresh record, even for a location seen before.
    fn from_create_params(id: AddressId, details: DeliveryAddress) -> Result<Self, Self::Error> {
        validate(&details)?;
        Ok(Self { id, details })
    }

    async fn on_update(&mut self, details: DeliveryAddress, _ctx: &()) -> Result<(), Self::Error> {
        validate(&details)?;
        self.details = details;
        Ok(())
    }

    async fn handle_action(&mut self, action: AddressAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
