use crate::model::{CategoryId, IngredientId, RestaurantId};
use serde::{Deserialize, Serialize};

/// An ingredient a restaurant stocks, such as "Mozzarella" in "Cheese".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientItem {
    pub id: IngredientId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    /// An ingredient category of the same restaurant.
    pub category_id: CategoryId,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub category_id: CategoryId,
}
