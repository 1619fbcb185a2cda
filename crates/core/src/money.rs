//! Monetary amounts.
//!
//! Prices are kept in the smallest currency unit (cents) so that totals are
//! exact integer arithmetic. The catalog wire format carries decimal prices;
//! conversion happens once at the parse boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amount in the smallest currency unit (e.g., cents).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

/// Failure converting a decimal price into [`Money`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    #[error("price must be non-negative, got {0}")]
    Negative(f64),

    #[error("price must be a finite number")]
    NotFinite,

    #[error("price {0} exceeds the representable range")]
    OutOfRange(f64),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a decimal price in major units (e.g. `5.5` dollars) to cents.
    ///
    /// Rounds to the nearest cent. Negative, non-finite, and absurdly large
    /// values are rejected rather than wrapped.
    pub fn from_price(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        if value < 0.0 {
            return Err(MoneyError::Negative(value));
        }

        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(MoneyError::OutOfRange(value));
        }

        Ok(Self(cents as u64))
    }

    /// Line-total arithmetic: unit price times a quantity.
    pub fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
