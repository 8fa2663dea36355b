//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # actor lifecycle and checkout milestones
//! RUST_LOG=debug cargo run    # every request with its payload
//! RUST_LOG=foody_orders::cart_actor=debug cargo run
//! ```
//!
//! The actor loop tags each line with `entity_type`, so module paths are left
//! out. Client calls open `#[instrument]` spans, which the compact format
//! prints inline:
//!
//! ```text
//! INFO create_order{customer_id=UserId(2) restaurant_id=RestaurantId(1)}: Sending create_order to actor lines=1 total=30.00
//! INFO create_order{customer_id=UserId(2) restaurant_id=RestaurantId(1)}: Action ok entity_type="Restaurant" id=restaurant_1
//! INFO create_order{customer_id=UserId(2) restaurant_id=RestaurantId(1)}: Created entity_type="Order" id=order_1 size=1
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
