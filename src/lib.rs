//! # Foody Orders
//!
//! > **The ordering backend of a food delivery platform, built on resource-oriented actors.**
//!
//! Restaurants publish menus, customers fill a cart and check out, restaurant
//! owners move orders through their statuses. The interesting part is the
//! checkout: a live, mutable cart becomes a frozen, priced order while the
//! restaurant's order queue and the customer's saved addresses stay consistent.
//!
//! ## 🏗️ Design
//!
//! Every resource type (users, addresses, restaurants, categories, foods,
//! ingredients, carts, orders) is owned by one [`ResourceActor`](actor_framework::ResourceActor)
//! running in its own tokio task. An actor handles its requests one at a time,
//! so a read-modify-write on one cart can never interleave with another. Two
//! concurrent "add pizza" requests always end up as one cart line with the
//! summed quantity.
//!
//! Cross-resource consistency lives in the entity hooks: an order queues
//! itself with its restaurant in `on_create` and leaves the queue in
//! `on_delete`. A failing hook leaves the store untouched.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Typed ids, [`Price`](model::Price) in cents, and the entities.
//!
//! ### 2. The Actors
//! - [`cart_actor`]: one cart per customer; merges lines by food, prices
//!   against the catalog.
//! - [`order_actor`]: placed orders and their status.
//! - [`user_actor`], [`address_actor`], [`restaurant_actor`],
//!   [`category_actor`], [`food_actor`], [`ingredient_actor`]: the catalog
//!   and accounts.
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! Domain clients wrap the generic `ResourceClient`.
//! [`OrderClient::create_order`](clients::OrderClient::create_order) runs
//! checkout. [`FoodyApi`](api::FoodyApi) resolves the caller's token through
//! [`identity`] and scopes every call to that caller.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`FoodySystem`](lifecycle::FoodySystem) starts and wires every actor,
//! configured by [`config`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```
//!
//! ## 🧪 Testing
//!
//! Clients are tested against [`actor_framework::mock`] without spawning
//! actors. The `tests/` directory runs complete flows against a real
//! [`FoodySystem`](lifecycle::FoodySystem).

pub mod address_actor;
pub mod api;
pub mod cart_actor;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod food_actor;
pub mod identity;
pub mod ingredient_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod user_actor;

pub use error::{ErrorKind, FoodyError};
