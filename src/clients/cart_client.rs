//! # Cart Client
//!
//! Every operation is addressed by the customer's id, which is also the id of
//! their cart. Line ids are looked up inside that cart only.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartItem, CartItemId, FoodId, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => CartError::AlreadyExists(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected cart action result: {result:?}"))
}

impl CartClient {
    /// Creates the customer's empty cart. A second call for the same customer
    /// fails with `AlreadyExists`.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, customer_id: UserId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate { customer_id })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, ingredients))]
    pub async fn add_item(
        &self,
        customer_id: UserId,
        food_id: FoodId,
        quantity: u32,
        ingredients: Vec<String>,
    ) -> Result<CartItem, CartError> {
        let action = CartAction::AddItem {
            food_id,
            quantity,
            ingredients,
        };
        self.item_action(customer_id, action).await
    }

    #[instrument(skip(self))]
    pub async fn update_item_quantity(
        &self,
        customer_id: UserId,
        item_id: CartItemId,
        quantity: u32,
    ) -> Result<CartItem, CartError> {
        self.item_action(customer_id, CartAction::UpdateQuantity { item_id, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        customer_id: UserId,
        item_id: CartItemId,
    ) -> Result<Cart, CartError> {
        self.cart_action(customer_id, CartAction::RemoveItem(item_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, customer_id: UserId) -> Result<Cart, CartError> {
        self.cart_action(customer_id, CartAction::Clear).await
    }

    /// The cart with current catalog prices and a freshly computed total.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer_id: UserId) -> Result<Cart, CartError> {
        self.cart_action(customer_id, CartAction::Priced).await
    }

    async fn item_action(&self, id: UserId, action: CartAction) -> Result<CartItem, CartError> {
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Item(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    async fn cart_action(&self, id: UserId, action: CartAction) -> Result<Cart, CartError> {
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Cart(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }
}
