use crate::api::FoodyApi;
use crate::clients::{
    AddressClient, CartClient, CategoryClient, FoodClient, IngredientClient, OrderClient,
    RestaurantClient, UserClient,
};
use crate::config::FoodyConfig;
use crate::identity::TokenAuthority;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// All actors of the platform, running.
///
/// Dependencies are passed in two ways. Actors whose hooks call other actors
/// get those clients as their `run()` context: carts price against foods,
/// orders link themselves into restaurants, foods and ingredients check their
/// category. Clients that orchestrate several
/// actors, like [`OrderClient`] for checkout, get them at construction.
///
/// ```rust
/// use foody_orders::config::FoodyConfig;
/// use foody_orders::lifecycle::FoodySystem;
///
/// #[tokio::main]
/// async fn main() {
///     let system = FoodySystem::new(&FoodyConfig::default());
///     let found = system.restaurant_client.search("pizza").await.unwrap();
///     assert!(found.is_empty());
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct FoodySystem {
    pub user_client: UserClient,
    pub address_client: AddressClient,
    pub restaurant_client: RestaurantClient,
    pub category_client: CategoryClient,
    pub food_client: FoodClient,
    pub ingredient_client: IngredientClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub api: FoodyApi,

    handles: Vec<JoinHandle<()>>,
}

impl FoodySystem {
    /// Spawns every actor. Must be called inside a tokio runtime.
    pub fn new(config: &FoodyConfig) -> Self {
        let buffer = config.actor_buffer;

        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (address_actor, address_client) = crate::address_actor::new(buffer);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(buffer);
        let (category_actor, category_client) = crate::category_actor::new(buffer);
        let (food_actor, food_client) = crate::food_actor::new(buffer);
        let (ingredient_actor, ingredient_client) = crate::ingredient_actor::new(buffer);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(
            buffer,
            user_client.clone(),
            address_client.clone(),
            restaurant_client.clone(),
            cart_client.clone(),
        );

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(address_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(food_actor.run(category_client.clone())),
            tokio::spawn(ingredient_actor.run(category_client.clone())),
            tokio::spawn(cart_actor.run(food_client.clone())),
            tokio::spawn(order_actor.run(restaurant_client.clone())),
        ];

        let identity = Arc::new(TokenAuthority::new(
            config.token_secret.clone(),
            config.token_ttl(),
        ));
        let api = FoodyApi::new(
            identity,
            user_client.clone(),
            restaurant_client.clone(),
            category_client.clone(),
            food_client.clone(),
            ingredient_client.clone(),
            cart_client.clone(),
            order_client.clone(),
        );

        info!(actors = handles.len(), buffer, "System started");
        Self {
            user_client,
            address_client,
            restaurant_client,
            category_client,
            food_client,
            ingredient_client,
            cart_client,
            order_client,
            api,
            handles,
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes.
    ///
    /// An actor stops once all clients for it are gone, including the ones
    /// held as context by other actors. The order actor holds the restaurant
    /// client, the cart actor the food client, and the food and ingredient
    /// actors the category client, so those stop after the actors holding
    /// them.
    ///
    /// Clones of the clients or the api kept elsewhere keep their actors
    /// alive, and this waits for them.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.api);
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.user_client);
        drop(self.address_client);
        drop(self.restaurant_client);
        drop(self.food_client);
        drop(self.ingredient_client);
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
