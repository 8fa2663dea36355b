use crate::model::AddressId;
use serde::{Deserialize, Serialize};

/// The value part of an address, as a caller supplies it.
///
/// Two addresses are the same location when all of these fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// A persisted address record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub id: AddressId,
    #[serde(flatten)]
    pub details: DeliveryAddress,
}

impl Address {
    /// Value equality on the location fields. The record id is ignored.
    pub fn same_location(&self, other: &Address) -> bool {
        self.details == other.details
    }
}
