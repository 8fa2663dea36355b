//! Custom actions for the Cart actor.
//!
//! A cart is only ever changed through these actions, one at a time, so two
//! concurrent adds of the same food always merge into one line.

use crate::model::{Cart, CartItem, CartItemId, FoodId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add `quantity` of a food. Merges into the existing line for that food.
    AddItem {
        food_id: FoodId,
        quantity: u32,
        ingredients: Vec<String>,
    },
    /// Set the quantity of one line.
    UpdateQuantity { item_id: CartItemId, quantity: u32 },
    RemoveItem(CartItemId),
    /// Remove every line. The cart itself stays.
    Clear,
    /// Refresh unit prices from the catalog and recompute every subtotal and
    /// the total.
    Priced,
}

/// Results from CartActions. `AddItem` and `UpdateQuantity` return the line,
/// the rest return the whole cart.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    Item(CartItem),
    Cart(Cart),
}
