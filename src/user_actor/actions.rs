//! Custom actions for the User actor.

use crate::model::{Address, RestaurantId};

/// Changes to a user's collections. Both return whether the collection changed.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds the address unless the user already has one at the same location.
    AppendAddressIfAbsent(Address),
    /// Adds the restaurant to the favorites, or removes it if already there.
    ToggleFavorite(RestaurantId),
}
