use crate::model::{OrderId, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A restaurant in the catalog.
///
/// `orders` is the incoming-order queue: ids of the orders placed with this
/// restaurant that have not been cancelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub cuisine_type: String,
    pub open: bool,
    pub orders: Vec<OrderId>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantCreate {
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub cuisine_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
}

impl Restaurant {
    /// Case-insensitive match on name, description or cuisine.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        [&self.name, &self.description, &self.cuisine_type]
            .iter()
            .any(|field| field.to_lowercase().contains(&keyword))
    }
}
