//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary amount.
///
/// Represented as a Decimal for precise calculations; hourly prices and
/// order totals never go through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from whole currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::new(units, 0))
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    /// Scale an amount by a whole number, e.g. hourly price times hours.
    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * Decimal::new(rhs, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_from_units() {
        let m = Money::from_units(50);
        assert_eq!(m.amount(), dec!(50));
    }

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(1250);
        assert_eq!(m.amount(), dec!(12.50));
    }

    #[test]
    fn money_scale_by_hours() {
        let price = Money::from_units(50);
        assert_eq!(price * 2, Money::from_units(100));
        assert_eq!(price * 0, Money::ZERO);
    }

    #[test]
    fn money_add_sub() {
        let a = Money::from_units(10);
        let b = Money::from_cents(250);
        assert_eq!(a + b, Money::from_cents(1250));
        assert_eq!(a - b, Money::from_cents(750));
    }

    #[test]
    fn money_predicates() {
        assert!(Money::from_units(1).is_positive());
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
    }

    #[test]
    fn money_ordering() {
        assert!(Money::from_units(2) > Money::from_units(1));
    }

    #[test]
    fn money_display_two_decimals() {
        assert_eq!(format!("{}", Money::from_units(50)), "50.00");
        assert_eq!(format!("{}", Money::from_cents(1205)), "12.05");
    }

    #[test]
    fn money_round() {
        let m = Money::new(dec!(10.006));
        assert_eq!(m.round().amount(), dec!(10.01));
    }

    #[test]
    fn money_serde_roundtrip() {
        let m = Money::from_cents(9999);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
