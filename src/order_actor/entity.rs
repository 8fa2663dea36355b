//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor is started with a [`RestaurantClient`] and keeps each
//! restaurant's order queue in step with the stored orders:
//!
//! - `on_create` queues the order with its restaurant before it is stored. If
//!   that fails nothing is stored.
//! - `on_delete` takes the order out of the queue before it is removed. A
//!   restaurant that no longer exists has nothing to clean up.

use super::error::OrderError;
use crate::clients::RestaurantClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::restaurant_actor::RestaurantError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = RestaurantClient;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// New orders are `PENDING` and stamped with the current time.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            customer_id: params.customer_id,
            restaurant_id: params.restaurant_id,
            delivery_address: params.delivery_address,
            items: params.items,
            total: params.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        restaurants.append_order(self.restaurant_id, self.id).await?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _restaurants: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        if !self.status.can_transition_to(update.status) {
            return Err(OrderError::IllegalTransition {
                from: self.status,
                to: update.status,
            });
        }
        debug!(order_id = %self.id, from = %self.status, to = %update.status, "Status change");
        self.status = update.status;
        Ok(())
    }

    async fn on_delete(&self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        match restaurants.remove_order(self.restaurant_id, self.id).await {
            Ok(_) | Err(RestaurantError::NotFound(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _restaurants: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
