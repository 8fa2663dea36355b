//! Domain clients: type-safe wrappers around
//! [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for
//! `get`/`fetch`/`list`/`delete` and adds the operations specific to its
//! resource. Framework errors come back as the resource's own error type:
//! entity errors are recovered by downcast, `NotFound` and `AlreadyExists`
//! keep their meaning, and a closed actor becomes `ActorCommunicationError`.

pub mod address_client;
pub mod cart_client;
pub mod category_client;
pub mod food_client;
pub mod ingredient_client;
pub mod order_client;
pub mod restaurant_client;
pub mod user_client;

pub use address_client::*;
pub use cart_client::*;
pub use category_client::*;
pub use food_client::*;
pub use ingredient_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use user_client::*;
