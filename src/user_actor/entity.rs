//! [`ActorEntity`] implementation for [`User`].

use super::actions::UserAction;
use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = bool;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.full_name.trim().is_empty() {
            return Err(UserError::ValidationError("full name is required".into()));
        }
        if !params.email.contains('@') {
            return Err(UserError::ValidationError(format!(
                "invalid email: {}",
                params.email
            )));
        }
        Ok(Self {
            id,
            full_name: params.full_name,
            email: params.email,
            role: params.role,
            addresses: Vec::new(),
            favorites: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        Ok(())
    }

    /// # Actions
    /// - `AppendAddressIfAbsent`: value-equality dedup, the record id is ignored
    /// - `ToggleFavorite`: returns `true` when the restaurant is now a favorite
    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            UserAction::AppendAddressIfAbsent(address) => {
                if self.has_address_at(&address) {
                    return Ok(false);
                }
                self.addresses.push(address);
                Ok(true)
            }
            UserAction::ToggleFavorite(restaurant_id) => {
                if let Some(pos) = self.favorites.iter().position(|id| *id == restaurant_id) {
                    self.favorites.remove(pos);
                    Ok(false)
                } else {
                    self.favorites.push(restaurant_id);
                    Ok(true)
                }
            }
        }
    }
}
