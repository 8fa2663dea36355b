//! # Ingredient Actor
//!
//! Ingredient items per restaurant with a boolean in-stock flag. There is no
//! quantity tracking. Every item belongs to an ingredient category of its own
//! restaurant; the actor runs with a category client to check that on create.

pub mod error;

pub use error::*;

use crate::clients::{CategoryClient, IngredientClient};
use crate::model::{CategoryKind, IngredientCreate, IngredientId, IngredientItem};
use actor_framework::{ActorEntity, ResourceActor};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum IngredientAction {
    /// Flip the in-stock flag. Returns the new value.
    ToggleStock,
}

#[async_trait]
impl ActorEntity for IngredientItem {
    type Id = IngredientId;
    type Create = IngredientCreate;
    type Update = ();
    type Action = IngredientAction;
    type ActionResult = bool;
    type Context = CategoryClient;
    type Error = IngredientError;

    fn id(&self) -> &IngredientId {
        &self.id
    }

    fn from_create_params(id: IngredientId, params: IngredientCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(IngredientError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name,
            category_id: params.category_id,
            in_stock: true,
        })
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), Self::Error> {
        categories
            .resolve(self.category_id, self.restaurant_id, CategoryKind::Ingredient)
            .await?;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &CategoryClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: IngredientAction,
        _ctx: &CategoryClient,
    ) -> Result<bool, Self::Error> {
        match action {
            IngredientAction::ToggleStock => {
                self.in_stock = !self.in_stock;
                Ok(self.in_stock)
            }
        }
    }
}

/// Creates a new Ingredient actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<IngredientItem>, IngredientClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, IngredientClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_actor::CategoryError;
    use crate::model::{Category, CategoryId, RestaurantId};
    use actor_framework::mock::MockClient;

    fn basil(category: u32) -> IngredientItem {
        IngredientItem::from_create_params(
            IngredientId(1),
            IngredientCreate {
                restaurant_id: RestaurantId(1),
                name: "Basil".into(),
                category_id: CategoryId(category),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_needs_an_ingredient_category_of_the_restaurant() {
        let mut categories = MockClient::<Category>::new();
        categories.expect_get(CategoryId(2)).return_ok(Some(Category {
            id: CategoryId(2),
            restaurant_id: RestaurantId(1),
            kind: CategoryKind::Ingredient,
            name: "Herbs".into(),
        }));
        categories.expect_get(CategoryId(3)).return_ok(Some(Category {
            id: CategoryId(3),
            restaurant_id: RestaurantId(1),
            kind: CategoryKind::Food,
            name: "Mains".into(),
        }));
        let client = CategoryClient::new(categories.client());

        basil(2).on_create(&client).await.unwrap();
        assert_eq!(
            basil(3).on_create(&client).await,
            Err(IngredientError::Category(CategoryError::NotFound(
                "category_3".into()
            )))
        );
        categories.verify();
    }

    #[tokio::test]
    async fn toggle_stock_flips() {
        let categories = MockClient::<Category>::new();
        let client = CategoryClient::new(categories.client());
        let mut item = basil(2);
        assert!(item.in_stock);
        assert!(!item
            .handle_action(IngredientAction::ToggleStock, &client)
            .await
            .unwrap());
        assert!(item
            .handle_action(IngredientAction::ToggleStock, &client)
            .await
            .unwrap());
    }
}
