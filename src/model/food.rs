use crate::model::{CategoryId, FoodId, Price, RestaurantId};
use serde::{Deserialize, Serialize};

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Food {
    pub id: FoodId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Menu section of the same restaurant, such as "Pizza" or "Drinks".
    pub category: Option<CategoryId>,
    pub vegetarian: bool,
    pub seasonal: bool,
    pub available: bool,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
}

/// Menu filters. Every flag that is set must hold; unset flags match anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodFilter {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub non_vegetarian: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl FoodFilter {
    pub fn matches(&self, food: &Food) -> bool {
        if self.vegetarian && !food.vegetarian {
            return false;
        }
        if self.non_vegetarian && food.vegetarian {
            return false;
        }
        if self.seasonal && !food.seasonal {
            return false;
        }
        match self.category {
            None => true,
            Some(category) => food.category == Some(category),
        }
    }
}

impl Food {
    /// Case-insensitive match on name or description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}
