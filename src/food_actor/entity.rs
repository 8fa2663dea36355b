//! [`ActorEntity`] implementation for [`Food`].
//!
//! The food actor runs with a [`CategoryClient`]. A food filed under a
//! category is only stored if that category is a food category of the same
//! restaurant.

use super::error::FoodError;
use crate::clients::CategoryClient;
use crate::model::{CategoryKind, Food, FoodCreate, FoodId, FoodUpdate, Price};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FoodAction {
    /// Flip the availability flag. Returns the new value.
    ToggleAvailability,
}

fn check_price(price: Price) -> Result<Price, FoodError> {
    if price.is_negative() {
        return Err(FoodError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Food {
    type Id = FoodId;
    type Create = FoodCreate;
    type Update = FoodUpdate;
    type Action = FoodAction;
    type ActionResult = bool;
    type Context = CategoryClient;
    type Error = FoodError;

    fn id(&self) -> &FoodId {
        &self.id
    }

    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(FoodError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name,
            description: params.description,
            price: check_price(params.price)?,
            category: params.category,
            vegetarian: params.vegetarian,
            seasonal: params.seasonal,
            available: true,
            ingredients: params.ingredients,
        })
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), Self::Error> {
        if let Some(category) = self.category {
            categories
                .resolve(category, self.restaurant_id, CategoryKind::Food)
                .await?;
        }
        Ok(())
    }

    /// Price changes apply to carts on their next read, never to placed orders.
    async fn on_update(
        &mut self,
        update: FoodUpdate,
        _categories: &CategoryClient,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: FoodAction,
        _categories: &CategoryClient,
    ) -> Result<bool, Self::Error> {
        match action {
            FoodAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(self.available)
            }
        }
    }
}
