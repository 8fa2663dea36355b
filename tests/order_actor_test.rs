use actor_framework::mock::MockClient;
use actor_framework::{FrameworkError, ResourceActor};
use foody_orders::clients::RestaurantClient;
use foody_orders::model::{
    Address, AddressId, DeliveryAddress, FoodId, FoodRef, Order, OrderCreate, OrderId, OrderItem,
    OrderStatus, OrderUpdate, Price, Restaurant, RestaurantId, UserId,
};
use foody_orders::order_actor::OrderError;
use foody_orders::restaurant_actor::RestaurantError;

// Real Order actor with a mocked restaurant actor: the hooks that keep a
// restaurant's order queue in step with the stored orders.

fn order_params(restaurant_id: RestaurantId) -> OrderCreate {
    OrderCreate {
        customer_id: UserId(1),
        restaurant_id,
        delivery_address: Address {
            id: AddressId(1),
            details: DeliveryAddress {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                postal_code: "62701".into(),
                country: "US".into(),
            },
        },
        items: vec![OrderItem {
            food: FoodRef {
                id: FoodId(1),
                name: "Pizza".into(),
                unit_price: Price::from_units(10),
            },
            quantity: 3,
            ingredients: vec![],
            subtotal: Price::from_units(30),
        }],
        total: Price::from_units(30),
    }
}

#[tokio::test]
async fn test_created_order_is_queued_with_restaurant() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    let handle = tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let order = orders.create(order_params(RestaurantId(1))).await.unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, Price::from_units(30));

    let stored = orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored, order);
    restaurant_mock.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_restaurant_means_nothing_stored() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(9))
        .return_err(FrameworkError::NotFound("restaurant_9".into()));

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let err = orders
        .create(order_params(RestaurantId(9)))
        .await
        .unwrap_err()
        .downcast_entity::<OrderError>()
        .unwrap();
    assert_eq!(
        err,
        OrderError::Restaurant(RestaurantError::NotFound("restaurant_9".into()))
    );
    assert!(orders.get(OrderId(1)).await.unwrap().is_none());
    restaurant_mock.verify();
}

#[tokio::test]
async fn test_status_update_keeps_snapshot() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let placed = orders.create(order_params(RestaurantId(1))).await.unwrap();
    for status in OrderStatus::ALL {
        let updated = orders
            .update(placed.id, OrderUpdate { status })
            .await
            .unwrap();
        assert_eq!(updated.status, status);
        assert_eq!(updated.items, placed.items);
        assert_eq!(updated.total, placed.total);
        assert_eq!(updated.created_at, placed.created_at);
    }
    restaurant_mock.verify();
}

#[tokio::test]
async fn test_delete_leaves_restaurant_queue() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let order = orders.create(order_params(RestaurantId(1))).await.unwrap();
    orders.delete(order.id).await.unwrap();

    assert!(orders.get(order.id).await.unwrap().is_none());
    restaurant_mock.verify();
}

#[tokio::test]
async fn test_delete_tolerates_vanished_restaurant() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_err(FrameworkError::NotFound("restaurant_1".into()));

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let order = orders.create(order_params(RestaurantId(1))).await.unwrap();
    orders.delete(order.id).await.unwrap();

    assert!(orders.get(order.id).await.unwrap().is_none());
    restaurant_mock.verify();
}

#[tokio::test]
async fn test_delete_kept_when_restaurant_unreachable() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_ok(true);
    restaurant_mock
        .expect_action(RestaurantId(1))
        .return_err(FrameworkError::ActorClosed);

    let (order_actor, orders) = ResourceActor::<Order>::new(10);
    tokio::spawn(order_actor.run(RestaurantClient::new(restaurant_mock.client())));

    let order = orders.create(order_params(RestaurantId(1))).await.unwrap();
    let err = orders
        .delete(order.id)
        .await
        .unwrap_err()
        .downcast_entity::<OrderError>()
        .unwrap();

    assert!(matches!(
        err,
        OrderError::Restaurant(RestaurantError::ActorCommunicationError(_))
    ));
    assert!(orders.get(order.id).await.unwrap().is_some());
    restaurant_mock.verify();
}
