//! [`ActorEntity`] implementation for [`Restaurant`].

use super::actions::RestaurantAction;
use super::error::RestaurantError;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = bool;
    type Context = ();
    type Error = RestaurantError;

    fn id(&self) -> &RestaurantId {
        &self.id
    }

    /// New restaurants start closed with an empty order queue.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RestaurantError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            owner_id: params.owner_id,
            name: params.name,
            description: params.description,
            cuisine_type: params.cuisine_type,
            open: false,
            orders: Vec::new(),
            registered_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(RestaurantError::ValidationError("name is required".into()));
            }
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(cuisine_type) = update.cuisine_type {
            self.cuisine_type = cuisine_type;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<bool, Self::Error> {
        match action {
            RestaurantAction::AppendOrder(order_id) => {
                if self.orders.contains(&order_id) {
                    return Ok(false);
                }
                self.orders.push(order_id);
                Ok(true)
            }
            RestaurantAction::RemoveOrder(order_id) => {
                let before = self.orders.len();
                self.orders.retain(|id| *id != order_id);
                Ok(self.orders.len() != before)
            }
            RestaurantAction::ToggleOpen => {
                self.open = !self.open;
                Ok(self.open)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, UserId};

    fn trattoria() -> Restaurant {
        Restaurant::from_create_params(
            RestaurantId(1),
            RestaurantCreate {
                owner_id: UserId(9),
                name: "Trattoria".into(),
                description: "Wood-fired pizza".into(),
                cuisine_type: "Italian".into(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn order_queue_append_and_remove() {
        let mut r = trattoria();
        let order = OrderId(3);
        assert!(r.handle_action(RestaurantAction::AppendOrder(order), &()).await.unwrap());
        assert!(!r.handle_action(RestaurantAction::AppendOrder(order), &()).await.unwrap());
        assert_eq!(r.orders, vec![order]);

        assert!(r.handle_action(RestaurantAction::RemoveOrder(order), &()).await.unwrap());
        assert!(!r.handle_action(RestaurantAction::RemoveOrder(order), &()).await.unwrap());
        assert!(r.orders.is_empty());
    }

    #[tokio::test]
    async fn toggle_open_flips() {
        let mut r = trattoria();
        assert!(!r.open);
        assert!(r.handle_action(RestaurantAction::ToggleOpen, &()).await.unwrap());
        assert!(!r.handle_action(RestaurantAction::ToggleOpen, &()).await.unwrap());
    }

    #[test]
    fn keyword_matches_any_text_field() {
        let r = trattoria();
        assert!(r.matches_keyword("italian"));
        assert!(r.matches_keyword("PIZZA"));
        assert!(!r.matches_keyword("sushi"));
    }
}
