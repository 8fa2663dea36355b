//! Custom actions for the Restaurant actor.

use crate::model::OrderId;

/// Restaurant actions. Each returns a flag described on the variant.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Queue an incoming order. `false` if it was already queued.
    AppendOrder(OrderId),
    /// Drop an order from the queue. `false` if it was not queued.
    RemoveOrder(OrderId),
    /// Flip the open flag. Returns the new value.
    ToggleOpen,
}
