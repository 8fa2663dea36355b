use crate::model::{Address, RestaurantId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// What a caller is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    RestaurantOwner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "ROLE_CUSTOMER",
            Role::RestaurantOwner => "ROLE_RESTAURANT_OWNER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_CUSTOMER" => Ok(Role::Customer),
            "ROLE_RESTAURANT_OWNER" => Ok(Role::RestaurantOwner),
            "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// A registered user.
///
/// # Actor Framework
/// Managed by the user actor. See [`impl ActorEntity for User`](#impl-ActorEntity-for-User)
/// for the address and favorite actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// Addresses used at checkout, without duplicate locations.
    pub addresses: Vec<Address>,
    pub favorites: Vec<RestaurantId>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub full_name: Option<String>,
}

impl User {
    pub fn has_address_at(&self, address: &Address) -> bool {
        self.addresses.iter().any(|a| a.same_location(address))
    }
}
