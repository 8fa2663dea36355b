//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The cart actor is started with a [`FoodClient`] as its context and reads
//! the catalog for every price it stores.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::FoodClient;
use crate::model::{compute_total, Cart, CartCreate, CartItem, CartItemId, FoodRef, UserId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

fn positive(quantity: u32) -> Result<u32, CartError> {
    if quantity == 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

impl Cart {
    /// Merges into the line for the same food, or appends a new line. Fails
    /// before touching the cart if a quantity or amount would overflow.
    fn add_line(
        &mut self,
        food: FoodRef,
        quantity: u32,
        ingredients: Vec<String>,
    ) -> Result<CartItem, CartError> {
        if let Some(index) = self.items.iter().position(|line| line.food.id == food.id) {
            let mut line = self.items[index].clone();
            let merged = line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow(line.id))?;
            line.food = food;
            line.set_quantity(merged)?;
            return self.replace_line(index, line);
        }

        let mut line = CartItem {
            id: CartItemId(self.next_item),
            food,
            quantity: 0,
            ingredients,
            subtotal: Default::default(),
        };
        line.set_quantity(quantity)?;
        let mut items = self.items.clone();
        items.push(line.clone());
        self.total = compute_total(&items)?;
        self.items = items;
        self.next_item += 1;
        Ok(line)
    }

    fn update_line(&mut self, item_id: CartItemId, quantity: u32) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|line| line.id == item_id)
            .ok_or(CartError::ItemNotFound(item_id))?;
        let mut line = self.items[index].clone();
        line.set_quantity(quantity)?;
        self.replace_line(index, line)
    }

    fn replace_line(&mut self, index: usize, line: CartItem) -> Result<CartItem, CartError> {
        let mut items = self.items.clone();
        items[index] = line.clone();
        self.total = compute_total(&items)?;
        self.items = items;
        Ok(line)
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = FoodClient;
    type Error = CartError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Carts are stored under their customer's id, one per customer.
    fn natural_id(params: &CartCreate) -> Option<UserId> {
        Some(params.customer_id)
    }

    fn from_create_params(id: UserId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            items: Vec::new(),
            total: Default::default(),
            next_item: 1,
        })
    }

    async fn on_update(&mut self, _update: (), _foods: &FoodClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        foods: &FoodClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem {
                food_id,
                quantity,
                ingredients,
            } => {
                let quantity = positive(quantity)?;
                let food = foods.fetch(food_id).await?;
                let line = self.add_line(FoodRef::from(&food), quantity, ingredients)?;
                Ok(CartActionResult::Item(line))
            }
            CartAction::UpdateQuantity { item_id, quantity } => {
                let quantity = positive(quantity)?;
                let line = self.update_line(item_id, quantity)?;
                Ok(CartActionResult::Item(line))
            }
            CartAction::RemoveItem(item_id) => {
                if self.item(item_id).is_none() {
                    return Err(CartError::ItemNotFound(item_id));
                }
                self.items.retain(|line| line.id != item_id);
                self.recompute_total()?;
                Ok(CartActionResult::Cart(self.clone()))
            }
            CartAction::Clear => {
                self.items.clear();
                self.recompute_total()?;
                Ok(CartActionResult::Cart(self.clone()))
            }
            CartAction::Priced => {
                for line in self.items.iter_mut() {
                    match foods.get(line.food.id).await? {
                        Some(food) => line.food.unit_price = food.price,
                        None => debug!(food_id = %line.food.id, "Food gone, keeping last price"),
                    }
                    line.set_quantity(line.quantity)?;
                }
                self.recompute_total()?;
                Ok(CartActionResult::Cart(self.clone()))
            }
        }
    }
}
