use crate::model::{Address, CartItem, FoodRef, OrderId, Price, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Where an order is in its delivery.
///
/// The accepted literals are exactly `PENDING`, `OUT_FOR_DELIVERY`,
/// `DELIVERED` and `COMPLETED`, matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    OutForDelivery,
    Delivered,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    /// The usual flow is `PENDING -> OUT_FOR_DELIVERY -> DELIVERED`, with
    /// `COMPLETED` as an alternate end and `PENDING` as a reset.
    ///
    /// Every move between the four statuses is accepted, including moves out of
    /// `DELIVERED` and `COMPLETED`. A stricter table belongs here.
    pub fn can_transition_to(&self, _next: OrderStatus) -> bool {
        true
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A frozen copy of a cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub food: FoodRef,
    pub quantity: u32,
    pub ingredients: Vec<String>,
    pub subtotal: Price,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            food: item.food.clone(),
            quantity: item.quantity,
            ingredients: item.ingredients.clone(),
            subtotal: item.subtotal,
        }
    }
}

/// A placed order.
///
/// Items and total are fixed when the order is created. Only `status` changes
/// afterwards.
///
/// # Actor Framework
/// Managed by the order actor, whose hooks keep the restaurant's order queue in
/// step with the stored orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: Address,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for storing a checked-out cart.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: Address,
    pub items: Vec<OrderItem>,
    pub total: Price,
}

#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}
