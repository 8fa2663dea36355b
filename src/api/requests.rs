//! Request payloads accepted by [`FoodyApi`](super::FoodyApi).

use crate::model::{CartItemId, DeliveryAddress, FoodId, RestaurantId, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AddCartItemRequest {
    pub food_id: FoodId,
    pub quantity: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartItemRequest {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub restaurant_id: RestaurantId,
    pub delivery_address: DeliveryAddress,
}

/// A new restaurant. The caller becomes its owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine_type: String,
}

/// Returned by [`FoodyApi::register`](super::FoodyApi::register).
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub user: User,
    pub token: String,
}
