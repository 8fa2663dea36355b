use crate::model::{CartItemId, Food, FoodId, Price, PriceOverflow, UserId};
use serde::Serialize;

/// The food a cart line points at, with the unit price last seen in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRef {
    pub id: FoodId,
    pub name: String,
    pub unit_price: Price,
}

impl From<&Food> for FoodRef {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            unit_price: food.price,
        }
    }
}

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub food: FoodRef,
    pub quantity: u32,
    pub ingredients: Vec<String>,
    pub subtotal: Price,
}

impl CartItem {
    /// Sets the quantity and recomputes the subtotal from the bound unit price.
    /// On overflow the line is left unchanged.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), PriceOverflow> {
        self.subtotal = self.food.unit_price.checked_mul(quantity)?;
        self.quantity = quantity;
        Ok(())
    }
}

/// A customer's live cart. There is exactly one per customer, stored under the
/// customer's id.
///
/// # Actor Framework
/// Managed by the cart actor; every mutation is a
/// [`CartAction`](crate::cart_actor::CartAction).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub id: UserId,
    pub items: Vec<CartItem>,
    pub total: Price,
    #[serde(skip)]
    pub(crate) next_item: u32,
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer_id: UserId,
}

impl Cart {
    pub fn customer_id(&self) -> UserId {
        self.id
    }

    pub fn item(&self, item_id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn recompute_total(&mut self) -> Result<(), PriceOverflow> {
        self.total = compute_total(&self.items)?;
        Ok(())
    }
}

/// Sum of `quantity * unit_price` over `items`.
///
/// Stored subtotals and totals are never trusted; this is the pricing used for
/// display and for the order total at checkout.
pub fn compute_total(items: &[CartItem]) -> Result<Price, PriceOverflow> {
    items.iter().try_fold(Price::ZERO, |total, item| {
        total.checked_add(item.food.unit_price.checked_mul(item.quantity)?)
    })
}
