//! Money in integer minor units (cents).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// A sum or product of prices left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Amount out of range")]
pub struct PriceOverflow;

/// A price or amount, in cents.
///
/// Prices are whole numbers of cents so that totals add up exactly. A line
/// subtotal is `unit_price * quantity`. Arithmetic is checked; amounts
/// never wrap.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Price::from_units(10)` is 10.00.
    pub fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Price) -> Result<Price, PriceOverflow> {
        self.0.checked_add(rhs.0).map(Price).ok_or(PriceOverflow)
    }

    /// `self * quantity`, the subtotal of a line.
    pub fn checked_mul(self, quantity: u32) -> Result<Price, PriceOverflow> {
        self.0
            .checked_mul(i64::from(quantity))
            .map(Price)
            .ok_or(PriceOverflow)
    }

    /// Sum of `prices`, failing on the first overflow.
    pub fn checked_sum<I>(prices: I) -> Result<Price, PriceOverflow>
    where
        I: IntoIterator<Item = Price>,
    {
        prices
            .into_iter()
            .try_fold(Price::ZERO, |total, price| total.checked_add(price))
    }
}

impl From<i64> for Price {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}
