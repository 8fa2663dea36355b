//! Type-safe identifiers.
//!
//! Every id is a `u32` from the owning actor's counter, displayed with a short
//! prefix (`order_7`) so log lines say what they point at.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a registered user. Also the key of that user's cart.
    UserId => "user"
);
entity_id!(
    /// Identifies a persisted address record.
    AddressId => "address"
);
entity_id!(RestaurantId => "restaurant");
entity_id!(FoodId => "food");
entity_id!(IngredientId => "ingredient");
entity_id!(
    /// Identifies a menu section or an ingredient group of one restaurant.
    CategoryId => "category"
);
entity_id!(
    /// Identifies a line within one customer's cart. Only unique inside that cart.
    CartItemId => "cart_item"
);
entity_id!(OrderId => "order");
