use crate::model::{CategoryId, RestaurantId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// What a category groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    /// A menu section, such as "Pizza" or "Drinks".
    Food,
    /// An ingredient group, such as "Cheese".
    Ingredient,
}

impl Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Food => f.write_str("food"),
            CategoryKind::Ingredient => f.write_str("ingredient"),
        }
    }
}

/// A named category, scoped to one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub restaurant_id: RestaurantId,
    pub kind: CategoryKind,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub restaurant_id: RestaurantId,
    pub kind: CategoryKind,
    pub name: String,
}

impl Category {
    /// Whether foods or ingredients of `restaurant_id` may be filed under this
    /// category.
    pub fn admits(&self, restaurant_id: RestaurantId, kind: CategoryKind) -> bool {
        self.restaurant_id == restaurant_id && self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_only_its_restaurant_and_kind() {
        let drinks = Category {
            id: CategoryId(1),
            restaurant_id: RestaurantId(2),
            kind: CategoryKind::Food,
            name: "Drinks".into(),
        };
        assert!(drinks.admits(RestaurantId(2), CategoryKind::Food));
        assert!(!drinks.admits(RestaurantId(3), CategoryKind::Food));
        assert!(!drinks.admits(RestaurantId(2), CategoryKind::Ingredient));
    }
}
