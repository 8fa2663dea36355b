//! # Lifecycle
//!
//! Starting, wiring and stopping the actors.
//!
//! - [`FoodySystem`] spawns one task per actor, hands each actor the clients it
//!   depends on and builds the [`FoodyApi`](crate::api::FoodyApi).
//! - [`setup_tracing`] installs the log subscriber.

pub mod foody_system;
pub mod tracing;

pub use foody_system::FoodySystem;
pub use self::tracing::setup_tracing;
