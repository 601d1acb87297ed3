//! Integer-cent amounts for the POS screen.
//!
//! Prices, totals and change are kept in cents so that `20.00 * 1.10` is exactly `22.00`
//! and a payment of `22.00` covers it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// An amount of money in cents. Negative values only appear as intermediate differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Parses a user-entered amount such as `22`, `22.5` or ` 22.00 `.
    ///
    /// The text is read as an exact decimal. Returns `None` for empty, non-numeric or
    /// out-of-range input. Sub-cent digits are rounded half away from zero.
    pub fn parse(input: &str) -> Option<Self> {
        let amount: Decimal = input.trim().parse().ok()?;
        amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Self)
    }

    /// `self * quantity`.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }

    /// `percent` percent of `self`, rounded half away from zero to the cent.
    pub fn percent(self, percent: u32) -> Self {
        let scaled = self.0 * i64::from(percent);
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Self(rounded)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        f.pad(&format!("{sign}${}.{:02}", abs / 100, abs % 100))
    }
}
