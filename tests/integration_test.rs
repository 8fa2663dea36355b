use foody_orders::api::{
    AddCartItemRequest, CreateRestaurantRequest, FoodyApi, OrderRequest, UpdateCartItemRequest,
};
use foody_orders::config::FoodyConfig;
use foody_orders::lifecycle::FoodySystem;
use foody_orders::model::{
    CartItemId, CategoryCreate, CategoryKind, DeliveryAddress, Food, FoodCreate, FoodFilter,
    FoodUpdate, IngredientCreate, OrderStatus, Price, Restaurant, RestaurantUpdate, Role,
    UserCreate, UserUpdate,
};
use foody_orders::ErrorKind;

// End-to-end flows through FoodyApi against a complete FoodySystem.

struct Fixture {
    system: FoodySystem,
    owner: String,
    restaurant: Restaurant,
    pizza: Food,
}

impl Fixture {
    async fn new() -> Self {
        let system = FoodySystem::new(&FoodyConfig::default());
        let api = system.api.clone();
        let owner = register(&api, "owner@example.com", Role::RestaurantOwner).await;
        let restaurant = api
            .create_restaurant(
                &owner,
                CreateRestaurantRequest {
                    name: "Trattoria".into(),
                    description: "Wood-fired pizza".into(),
                    cuisine_type: "Italian".into(),
                },
            )
            .await
            .unwrap();
        let pizza = add_food(&api, &owner, &restaurant, "Pizza", 10).await;
        Self {
            system,
            owner,
            restaurant,
            pizza,
        }
    }

    fn api(&self) -> &FoodyApi {
        &self.system.api
    }

    async fn customer(&self, email: &str) -> String {
        register(self.api(), email, Role::Customer).await
    }

    fn order_request(&self) -> OrderRequest {
        OrderRequest {
            restaurant_id: self.restaurant.id,
            delivery_address: address("1 Main St"),
        }
    }
}

async fn register(api: &FoodyApi, email: &str, role: Role) -> String {
    api.register(UserCreate {
        full_name: email.split('@').next().unwrap_or(email).to_string(),
        email: email.to_string(),
        role,
    })
    .await
    .unwrap()
    .token
}

async fn add_food(
    api: &FoodyApi,
    owner: &str,
    restaurant: &Restaurant,
    name: &str,
    units: i64,
) -> Food {
    api.create_food(
        owner,
        FoodCreate {
            restaurant_id: restaurant.id,
            name: name.into(),
            description: String::new(),
            price: Price::from_units(units),
            category: None,
            vegetarian: name == "Pizza",
            seasonal: false,
            ingredients: vec![],
        },
    )
    .await
    .unwrap()
}

fn address(street: &str) -> DeliveryAddress {
    DeliveryAddress {
        street: street.into(),
        city: "Springfield".into(),
        state: "IL".into(),
        postal_code: "62701".into(),
        country: "US".into(),
    }
}

fn add(food: &Food, quantity: u32) -> AddCartItemRequest {
    AddCartItemRequest {
        food_id: food.id,
        quantity,
        ingredients: vec![],
    }
}

#[tokio::test]
async fn test_checkout_scenario() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;

    // 1. Two adds of the same food merge into one line
    api.add_to_cart(&alice, add(&fx.pizza, 2)).await.unwrap();
    assert_eq!(api.get_cart(&alice).await.unwrap().total, Price::from_units(20));

    let line = api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();
    assert_eq!(line.quantity, 3);
    let cart = api.get_cart(&alice).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total, Price::from_units(30));

    // 2. Checkout
    let order = api.create_order(&alice, fx.order_request()).await.unwrap();
    assert_eq!(order.total, Price::from_units(30));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].food.id, fx.pizza.id);
    assert_eq!(order.items[0].quantity, 3);

    // 3. The restaurant sees it, the cart is left as it was
    let restaurant = fx
        .system
        .restaurant_client
        .find_by_owner(fx.restaurant.owner_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(restaurant.orders, vec![order.id]);
    assert_eq!(api.get_cart(&alice).await.unwrap().items.len(), 1);

    // 4. Status changes
    let delivered = api
        .update_order_status(&fx.owner, order.id, "DELIVERED")
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);

    let err = api
        .update_order_status(&fx.owner, order.id, "SHIPPED")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "please select a valid order status");
    assert_eq!(
        api.find_order(&alice, order.id).await.unwrap().status,
        OrderStatus::Delivered
    );

    let Fixture { system, .. } = fx;
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_is_a_frozen_snapshot() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;

    api.add_to_cart(&alice, add(&fx.pizza, 2)).await.unwrap();
    let placed = api
        .create_order(&alice, fx.order_request())
        .await
        .unwrap();

    api.clear_cart(&alice).await.unwrap();
    fx.system
        .food_client
        .update_food(
            fx.pizza.id,
            FoodUpdate {
                price: Some(Price::from_units(15)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(api.find_order(&alice, placed.id).await.unwrap(), placed);
    assert!(api.get_cart(&alice).await.unwrap().items.is_empty());

    // A new cart prices at the current catalog price
    api.add_to_cart(&alice, add(&fx.pizza, 2)).await.unwrap();
    let second = api
        .create_order(&alice, fx.order_request())
        .await
        .unwrap();
    assert_eq!(second.total, Price::from_units(30));
    assert_eq!(placed.total, Price::from_units(20));
}

#[tokio::test]
async fn test_cart_total_follows_updates_and_removals() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let salad = add_food(api, &fx.owner, &fx.restaurant, "Salad", 7).await;

    let pizza_line = api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();
    let salad_line = api.add_to_cart(&alice, add(&salad, 2)).await.unwrap();
    assert_eq!(api.get_cart(&alice).await.unwrap().total, Price::from_units(24));

    let updated = api
        .update_cart_item(
            &alice,
            UpdateCartItemRequest {
                cart_item_id: pizza_line.id,
                quantity: 4,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.subtotal, Price::from_units(40));
    assert_eq!(api.get_cart(&alice).await.unwrap().total, Price::from_units(54));

    let cart = api.remove_cart_item(&alice, salad_line.id).await.unwrap();
    assert_eq!(cart.total, Price::from_units(40));

    let err = api
        .update_cart_item(
            &alice,
            UpdateCartItemRequest {
                cart_item_id: pizza_line.id,
                quantity: 0,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = api
        .remove_cart_item(&alice, salad_line.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unknown_food_is_not_found() {
    let fx = Fixture::new().await;
    let alice = fx.customer("alice@example.com").await;

    let mut missing = fx.pizza.clone();
    missing.id.0 += 100;
    let err = fx
        .api()
        .add_to_cart(&alice, add(&missing, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(fx.api().get_cart(&alice).await.unwrap().items.is_empty());
}

#[tokio::test]
async fn test_cart_items_are_scoped_to_caller() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let bob = fx.customer("bob@example.com").await;
    let salad = add_food(api, &fx.owner, &fx.restaurant, "Salad", 7).await;

    api.add_to_cart(&bob, add(&fx.pizza, 1)).await.unwrap();
    let bobs_salad = api.add_to_cart(&bob, add(&salad, 1)).await.unwrap();
    api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();

    // Alice's cart has no line with the id of Bob's salad
    assert_eq!(bobs_salad.id, CartItemId(2));
    let err = api
        .remove_cart_item(&alice, bobs_salad.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(api.get_cart(&bob).await.unwrap().items.len(), 2);
}

#[tokio::test]
async fn test_concurrent_adds_merge_into_one_line() {
    let fx = Fixture::new().await;
    let alice = fx.customer("alice@example.com").await;

    let adds = (1..=20u32).map(|quantity| {
        let api = fx.api().clone();
        let alice = alice.clone();
        let request = add(&fx.pizza, quantity);
        tokio::spawn(async move { api.add_to_cart(&alice, request).await })
    });
    for handle in adds.collect::<Vec<_>>() {
        handle.await.unwrap().unwrap();
    }

    let cart = fx.api().get_cart(&alice).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 210);
    assert_eq!(cart.total, Price::from_units(2100));
}

#[tokio::test]
async fn test_cancelled_order_is_gone_everywhere() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;

    api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();
    let kept = api
        .create_order(&alice, fx.order_request())
        .await
        .unwrap();
    let cancelled = api
        .create_order(&alice, fx.order_request())
        .await
        .unwrap();

    api.cancel_order(&alice, cancelled.id).await.unwrap();

    let err = api.find_order(&alice, cancelled.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let err = api.cancel_order(&alice, cancelled.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let orders = api
        .restaurant_orders(&fx.owner, fx.restaurant.id, None)
        .await
        .unwrap();
    assert_eq!(orders, vec![kept.clone()]);
    let restaurant = fx
        .system
        .restaurant_client
        .find_by_owner(fx.restaurant.owner_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(restaurant.orders, vec![kept.id]);
}

#[tokio::test]
async fn test_restaurant_orders_filter_by_status() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let bob = fx.customer("bob@example.com").await;

    for customer in [&alice, &bob] {
        api.add_to_cart(customer, add(&fx.pizza, 1)).await.unwrap();
    }
    let first = api
        .create_order(&alice, fx.order_request())
        .await
        .unwrap();
    let second = api
        .create_order(&bob, fx.order_request())
        .await
        .unwrap();
    api.update_order_status(&fx.owner, second.id, "OUT_FOR_DELIVERY")
        .await
        .unwrap();

    let all = api
        .restaurant_orders(&fx.owner, fx.restaurant.id, None)
        .await
        .unwrap();
    assert_eq!(all.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first.id, second.id]);

    let pending = api
        .restaurant_orders(&fx.owner, fx.restaurant.id, Some("PENDING"))
        .await
        .unwrap();
    assert_eq!(pending.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first.id]);

    let lowercase = api
        .restaurant_orders(&fx.owner, fx.restaurant.id, Some("pending"))
        .await
        .unwrap();
    assert!(lowercase.is_empty());

    let history = api.order_history(&bob).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, OrderStatus::OutForDelivery);
}

#[tokio::test]
async fn test_delivery_addresses_are_deduplicated() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();

    for street in ["1 Main St", "1 Main St", "2 Side Rd"] {
        api.create_order(
            &alice,
            OrderRequest {
                restaurant_id: fx.restaurant.id,
                delivery_address: address(street),
            },
        )
        .await
        .unwrap();
    }

    let user = fx
        .system
        .user_client
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    let streets: Vec<_> = user
        .addresses
        .iter()
        .map(|a| a.details.street.as_str())
        .collect();
    assert_eq!(streets, vec!["1 Main St", "2 Side Rd"]);
}

#[tokio::test]
async fn test_favorites_toggle() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;

    assert!(api.toggle_favorite(&alice, fx.restaurant.id).await.unwrap());
    assert!(!api.toggle_favorite(&alice, fx.restaurant.id).await.unwrap());

    let mut missing = fx.restaurant.id;
    missing.0 += 100;
    let err = api.toggle_favorite(&alice, missing).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_access_control() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let rival = register(api, "rival@example.com", Role::RestaurantOwner).await;
    let admin = register(api, "admin@example.com", Role::Admin).await;

    api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();
    let order = api.create_order(&alice, fx.order_request()).await.unwrap();

    // No or bad token
    for token in ["", "garbage", "Bearer abc.def"] {
        let err = api.get_cart(token).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }

    // Customers and other owners may not manage the restaurant
    for token in [&alice, &rival] {
        let err = api
            .update_order_status(token, order.id, "DELIVERED")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        let err = api
            .restaurant_orders(token, fx.restaurant.id, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
    let err = api.cancel_order(&rival, order.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let err = api
        .create_restaurant(
            &alice,
            CreateRestaurantRequest {
                name: "Pop-up".into(),
                description: String::new(),
                cuisine_type: "Fusion".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    // Admins may
    let completed = api
        .update_order_status(&admin, order.id, "COMPLETED")
        .await
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);
    api.cancel_order(&admin, order.id).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let fx = Fixture::new().await;
    fx.customer("alice@example.com").await;

    let err = fx
        .api()
        .register(UserCreate {
            full_name: "Alice Again".into(),
            email: "alice@example.com".into(),
            role: Role::Customer,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_catalog_browsing() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let mains = api
        .create_category(
            &fx.owner,
            CategoryCreate {
                restaurant_id: fx.restaurant.id,
                kind: CategoryKind::Food,
                name: "Mains".into(),
            },
        )
        .await
        .unwrap();
    let steak = api
        .create_food(
            &fx.owner,
            FoodCreate {
                restaurant_id: fx.restaurant.id,
                name: "Steak".into(),
                description: "Grilled".into(),
                price: Price::from_units(25),
                category: Some(mains.id),
                vegetarian: false,
                seasonal: false,
                ingredients: vec![],
            },
        )
        .await
        .unwrap();

    let vegetarian = api
        .restaurant_menu(
            &alice,
            fx.restaurant.id,
            FoodFilter {
                vegetarian: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(vegetarian, vec![fx.pizza.clone()]);

    let in_mains = api
        .restaurant_menu(
            &alice,
            fx.restaurant.id,
            FoodFilter {
                category: Some(mains.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(in_mains, vec![steak]);
    assert_eq!(
        api.restaurant_categories(&alice, fx.restaurant.id, CategoryKind::Food)
            .await
            .unwrap(),
        vec![mains.clone()]
    );

    let found = api.search_restaurants(&alice, "PIZZA").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, fx.restaurant.id);

    assert!(api
        .toggle_restaurant_open(&fx.owner, fx.restaurant.id)
        .await
        .unwrap());

    let herbs = api
        .create_category(
            &fx.owner,
            CategoryCreate {
                restaurant_id: fx.restaurant.id,
                kind: CategoryKind::Ingredient,
                name: "Herbs".into(),
            },
        )
        .await
        .unwrap();
    let basil = api
        .create_ingredient(
            &fx.owner,
            IngredientCreate {
                restaurant_id: fx.restaurant.id,
                name: "Basil".into(),
                category_id: herbs.id,
            },
        )
        .await
        .unwrap();
    assert!(basil.in_stock);
    assert!(!api
        .toggle_ingredient_stock(&fx.owner, basil.id)
        .await
        .unwrap());
    let stock = api
        .restaurant_ingredients(&fx.owner, fx.restaurant.id)
        .await
        .unwrap();
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].id, basil.id);
    assert!(!stock[0].in_stock);

    // Ingredient categories are for managers only
    let err = api
        .restaurant_categories(&alice, fx.restaurant.id, CategoryKind::Ingredient)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let err = api
        .toggle_ingredient_stock(&alice, basil.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_unresolved_categories_are_not_found() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let rival = register(api, "rival@example.com", Role::RestaurantOwner).await;
    let other = api
        .create_restaurant(
            &rival,
            CreateRestaurantRequest {
                name: "Sushi Bar".into(),
                description: "Fresh fish".into(),
                cuisine_type: "Japanese".into(),
            },
        )
        .await
        .unwrap();
    let foreign = api
        .create_category(
            &rival,
            CategoryCreate {
                restaurant_id: other.id,
                kind: CategoryKind::Food,
                name: "Rolls".into(),
            },
        )
        .await
        .unwrap();
    let herbs = api
        .create_category(
            &fx.owner,
            CategoryCreate {
                restaurant_id: fx.restaurant.id,
                kind: CategoryKind::Ingredient,
                name: "Herbs".into(),
            },
        )
        .await
        .unwrap();

    let food = |category| FoodCreate {
        restaurant_id: fx.restaurant.id,
        name: "Salad".into(),
        description: String::new(),
        price: Price::from_units(7),
        category: Some(category),
        vegetarian: true,
        seasonal: false,
        ingredients: vec![],
    };
    // Another restaurant's category, then an ingredient category
    for category in [foreign.id, herbs.id] {
        let err = api.create_food(&fx.owner, food(category)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
    let err = api
        .create_ingredient(
            &fx.owner,
            IngredientCreate {
                restaurant_id: fx.restaurant.id,
                name: "Nori".into(),
                category_id: foreign.id,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Nothing was stored
    let menu = api
        .restaurant_menu(&fx.owner, fx.restaurant.id, FoodFilter::default())
        .await
        .unwrap();
    assert_eq!(menu, vec![fx.pizza.clone()]);

    // Only managers create categories
    let err = api
        .create_category(
            &rival,
            CategoryCreate {
                restaurant_id: fx.restaurant.id,
                kind: CategoryKind::Food,
                name: "Desserts".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_food_management() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let rival = register(api, "rival@example.com", Role::RestaurantOwner).await;
    api.add_to_cart(&alice, add(&fx.pizza, 2)).await.unwrap();

    assert!(!api
        .toggle_food_availability(&fx.owner, fx.pizza.id)
        .await
        .unwrap());
    assert!(api
        .toggle_food_availability(&fx.owner, fx.pizza.id)
        .await
        .unwrap());
    let err = api
        .toggle_food_availability(&rival, fx.pizza.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let found = api.search_foods(&alice, "PIZ").await.unwrap();
    assert_eq!(found.iter().map(|f| f.id).collect::<Vec<_>>(), vec![fx.pizza.id]);
    assert!(api.search_foods(&alice, "sushi").await.unwrap().is_empty());

    let err = api.delete_food(&rival, fx.pizza.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    api.delete_food(&fx.owner, fx.pizza.id).await.unwrap();

    let menu = api
        .restaurant_menu(&alice, fx.restaurant.id, FoodFilter::default())
        .await
        .unwrap();
    assert!(menu.is_empty());
    let err = api.delete_food(&fx.owner, fx.pizza.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // The cart keeps the line at its last known price
    let cart = api.get_cart(&alice).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total, Price::from_units(20));
    let err = api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_restaurant_and_profile_management() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let rival = register(api, "rival@example.com", Role::RestaurantOwner).await;

    let profile = api.profile(&alice).await.unwrap();
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.role, Role::Customer);
    let renamed = api
        .update_profile(
            &alice,
            UserUpdate {
                full_name: Some("Alice Liddell".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.id, profile.id);
    assert_eq!(api.profile(&alice).await.unwrap().full_name, "Alice Liddell");

    let update = || RestaurantUpdate {
        name: Some("Trattoria Nuova".into()),
        ..Default::default()
    };
    let err = api
        .update_restaurant(&rival, fx.restaurant.id, update())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let updated = api
        .update_restaurant(&fx.owner, fx.restaurant.id, update())
        .await
        .unwrap();
    assert_eq!(updated.name, "Trattoria Nuova");
    assert_eq!(updated.cuisine_type, "Italian");

    let other = api
        .create_restaurant(
            &rival,
            CreateRestaurantRequest {
                name: "Sushi Bar".into(),
                description: "Fresh fish".into(),
                cuisine_type: "Japanese".into(),
            },
        )
        .await
        .unwrap();
    let all = api.all_restaurants(&alice).await.unwrap();
    assert_eq!(
        all.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![fx.restaurant.id, other.id]
    );

    let err = api
        .delete_restaurant(&rival, fx.restaurant.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    api.delete_restaurant(&fx.owner, fx.restaurant.id)
        .await
        .unwrap();

    let all = api.all_restaurants(&alice).await.unwrap();
    assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![other.id]);
    let err = api
        .restaurant_menu(&alice, fx.restaurant.id, FoodFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    // Its foods went with it
    assert!(api.search_foods(&alice, "pizza").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_orders_of_a_removed_restaurant() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let rival = register(api, "rival@example.com", Role::RestaurantOwner).await;
    let admin = register(api, "admin@example.com", Role::Admin).await;

    api.add_to_cart(&alice, add(&fx.pizza, 1)).await.unwrap();
    let order = api.create_order(&alice, fx.order_request()).await.unwrap();
    api.delete_restaurant(&fx.owner, fx.restaurant.id)
        .await
        .unwrap();

    // Nobody owns the restaurant any more: others are refused, not told it is gone
    for token in [&rival, &fx.owner] {
        let err = api.find_order(token, order.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        let err = api.cancel_order(token, order.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        let err = api
            .update_order_status(token, order.id, "DELIVERED")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    assert_eq!(api.find_order(&alice, order.id).await.unwrap(), order);
    assert_eq!(api.find_order(&admin, order.id).await.unwrap(), order);
    api.cancel_order(&alice, order.id).await.unwrap();
    let err = api.find_order(&admin, order.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_cart_amount_overflow_is_rejected() {
    let fx = Fixture::new().await;
    let api = fx.api();
    let alice = fx.customer("alice@example.com").await;
    let bob = fx.customer("bob@example.com").await;
    let caviar = api
        .create_food(
            &fx.owner,
            FoodCreate {
                restaurant_id: fx.restaurant.id,
                name: "Caviar".into(),
                description: String::new(),
                price: Price::from_cents(i64::MAX / 2),
                category: None,
                vegetarian: false,
                seasonal: false,
                ingredients: vec![],
            },
        )
        .await
        .unwrap();

    // Add: the subtotal no longer fits
    let err = api.add_to_cart(&alice, add(&caviar, 3)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(api.get_cart(&alice).await.unwrap().items.is_empty());

    // Update: the line keeps its quantity
    let line = api.add_to_cart(&alice, add(&caviar, 1)).await.unwrap();
    let err = api
        .update_cart_item(
            &alice,
            UpdateCartItemRequest {
                cart_item_id: line.id,
                quantity: 3,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let cart = api.get_cart(&alice).await.unwrap();
    assert_eq!(cart.items[0].quantity, 1);
    assert_eq!(cart.total, Price::from_cents(i64::MAX / 2));

    // The cart actor keeps serving everyone
    api.add_to_cart(&bob, add(&fx.pizza, 1)).await.unwrap();
    assert_eq!(api.get_cart(&bob).await.unwrap().total, Price::from_units(10));
}
