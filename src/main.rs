//! # Foody demo
//!
//! Runs one checkout end to end against a fresh [`FoodySystem`]:
//!
//! 1. An owner registers, opens a restaurant and puts a pizza on the menu
//!    under a "Pizza" category.
//! 2. A customer registers and adds the pizza to their cart twice.
//! 3. The customer checks out.
//! 4. The owner marks the order delivered, then tries an unknown status.

use foody_orders::api::{AddCartItemRequest, CreateRestaurantRequest, OrderRequest};
use foody_orders::config::FoodyConfig;
use foody_orders::lifecycle::{setup_tracing, FoodySystem};
use foody_orders::model::{
    CategoryCreate, CategoryKind, DeliveryAddress, FoodCreate, Price, Role, UserCreate,
};
use foody_orders::FoodyError;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    info!("Starting foody demo");

    let config = FoodyConfig::from_env_or_default();
    let system = FoodySystem::new(&config);
    let api = system.api.clone();

    let span = tracing::info_span!("restaurant_setup");
    let (owner_token, restaurant, pizza) = async {
        let owner = api
            .register(UserCreate {
                full_name: "Mario Rossi".to_string(),
                email: "mario@trattoria.example".to_string(),
                role: Role::RestaurantOwner,
            })
            .await?;
        let restaurant = api
            .create_restaurant(
                &owner.token,
                CreateRestaurantRequest {
                    name: "Trattoria Mario".to_string(),
                    description: "Wood-fired pizza".to_string(),
                    cuisine_type: "Italian".to_string(),
                },
            )
            .await?;
        api.toggle_restaurant_open(&owner.token, restaurant.id).await?;
        let section = api
            .create_category(
                &owner.token,
                CategoryCreate {
                    restaurant_id: restaurant.id,
                    kind: CategoryKind::Food,
                    name: "Pizza".to_string(),
                },
            )
            .await?;
        let pizza = api
            .create_food(
                &owner.token,
                FoodCreate {
                    restaurant_id: restaurant.id,
                    name: "Pizza Margherita".to_string(),
                    description: "Tomato, mozzarella, basil".to_string(),
                    price: Price::from_units(10),
                    category: Some(section.id),
                    vegetarian: true,
                    seasonal: false,
                    ingredients: vec!["basil".to_string()],
                },
            )
            .await?;
        Ok::<_, FoodyError>((owner.token, restaurant, pizza))
    }
    .instrument(span)
    .await?;
    info!(restaurant_id = %restaurant.id, food_id = %pizza.id, "Restaurant ready");

    let span = tracing::info_span!("shopping");
    let customer_token = async {
        let customer = api
            .register(UserCreate {
                full_name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                role: Role::Customer,
            })
            .await?;
        for quantity in [2, 1] {
            api.add_to_cart(
                &customer.token,
                AddCartItemRequest {
                    food_id: pizza.id,
                    quantity,
                    ingredients: vec!["basil".to_string()],
                },
            )
            .await?;
            let cart = api.get_cart(&customer.token).await?;
            info!(lines = cart.items.len(), total = %cart.total, "Cart updated");
        }
        Ok::<_, FoodyError>(customer.token)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let order = api
        .create_order(
            &customer_token,
            OrderRequest {
                restaurant_id: restaurant.id,
                delivery_address: DeliveryAddress {
                    street: "1 Main St".to_string(),
                    city: "Springfield".to_string(),
                    state: "IL".to_string(),
                    postal_code: "62701".to_string(),
                    country: "US".to_string(),
                },
            },
        )
        .instrument(span)
        .await?;
    info!(order_id = %order.id, total = %order.total, status = %order.status, "Order placed");

    let span = tracing::info_span!("fulfilment");
    async {
        let delivered = api
            .update_order_status(&owner_token, order.id, "DELIVERED")
            .await?;
        info!(order_id = %delivered.id, status = %delivered.status, "Status updated");

        match api.update_order_status(&owner_token, order.id, "SHIPPED").await {
            Ok(order) => error!(status = %order.status, "Unknown status was accepted"),
            Err(e) => info!(kind = %e.kind(), error = %e, "Unknown status rejected"),
        }
        Ok::<_, FoodyError>(())
    }
    .instrument(span)
    .await?;

    drop(api);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
