//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor. Checkout
//! is orchestrated here; keeping the restaurant's order queue in step happens
//! in the Order actor's hooks.
use crate::clients::{AddressClient, CartClient, RestaurantClient, UserClient};
use crate::model::{
    DeliveryAddress, Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate,
    RestaurantId, UserId,
};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    users: UserClient,
    addresses: AddressClient,
    restaurants: RestaurantClient,
    carts: CartClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        users: UserClient,
        addresses: AddressClient,
        restaurants: RestaurantClient,
        carts: CartClient,
    ) -> Self {
        Self {
            inner,
            users,
            addresses,
            restaurants,
            carts,
        }
    }

    /// Places an order for everything in the customer's cart.
    ///
    /// The order's items and total are copied from the cart as priced right
    /// now. Later changes to the cart or to food prices do not touch it. The
    /// cart itself is not cleared.
    #[instrument(skip(self, delivery_address))]
    pub async fn create_order(
        &self,
        customer_id: UserId,
        restaurant_id: RestaurantId,
        delivery_address: DeliveryAddress,
    ) -> Result<Order, OrderError> {
        debug!(?delivery_address, "create_order called");

        let address = self.addresses.save_address(delivery_address).await?;
        let added = self
            .users
            .append_address_if_absent(customer_id, address.clone())
            .await?;
        debug!(address_id = %address.id, added, "Delivery address saved");

        let restaurant = self.restaurants.fetch(restaurant_id).await?;

        let cart = self.carts.get_cart(customer_id).await?;
        let items: Vec<OrderItem> = cart.items.iter().map(OrderItem::from).collect();

        info!(lines = items.len(), total = %cart.total, "Sending create_order to actor");
        let order = self
            .inner
            .create(OrderCreate {
                customer_id,
                restaurant_id: restaurant.id,
                delivery_address: address,
                items,
                total: cart.total,
            })
            .await
            .map_err(Self::map_error)?;

        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Sets the status from its literal. An unknown literal fails with
    /// `InvalidStatus` and leaves the order as it was.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = status
            .parse()
            .map_err(|_| OrderError::InvalidStatus(status.to_string()))?;
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }

    /// Deletes the order. It also leaves its restaurant's order queue.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: OrderId) -> Result<Order, OrderError> {
        self.fetch(id).await
    }

    /// The customer's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn orders_for_customer(&self, customer_id: UserId) -> Result<Vec<Order>, OrderError> {
        self.list(Query::new("by_customer", move |o: &Order| {
            o.customer_id == customer_id
        }))
        .await
    }

    /// The restaurant's orders, oldest first. With a status literal, only
    /// orders currently in exactly that status; an unknown literal matches
    /// nothing.
    #[instrument(skip(self))]
    pub async fn orders_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
        status: Option<&str>,
    ) -> Result<Vec<Order>, OrderError> {
        let status = status.map(str::to_owned);
        self.list(Query::new("by_restaurant", move |o: &Order| {
            o.restaurant_id == restaurant_id
                && status.as_deref().is_none_or(|s| o.status.as_str() == s)
        }))
        .await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => OrderError::AlreadyExists(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
