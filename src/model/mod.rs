//! Pure data structures. The ones with an id are managed by actors through the
//! [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod address;
pub mod cart;
pub mod category;
pub mod food;
pub mod ids;
pub mod ingredient;
pub mod money;
pub mod order;
pub mod restaurant;
pub mod user;

pub use address::*;
pub use cart::*;
pub use category::*;
pub use food::*;
pub use ids::*;
pub use ingredient::*;
pub use money::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
