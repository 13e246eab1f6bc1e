//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary amounts
//! using rust_decimal for precise calculations without floating-point errors.
//! All amounts are fixed-point with exactly two decimal places, matching the
//! NUMERIC(12,2) columns they are stored in and the decimal strings they are
//! serialized as.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with two decimal places
///
/// Money wraps `rust_decimal::Decimal` and normalizes every value to two
/// decimal places using banker's rounding (round half to even), so amounts
/// compare and sum exactly. Serialization is transparent: a `Money` value
/// appears on the wire as a decimal string such as `"10.00"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to two decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(2))
    }

    /// Creates Money from an integer amount in minor units (cents)
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, 2))
    }

    /// Returns a zero amount
    pub fn zero() -> Self {
        Self(dec!(0.00))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition, failing on arithmetic overflow
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction, failing on arithmetic overflow
    pub fn checked_sub(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies a unit amount by a quantity, failing on overflow
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// let line_total = unit_price.checked_mul_qty(3).unwrap();
    /// assert_eq!(line_total, Money::from_minor(897));
    /// ```
    pub fn checked_mul_qty(&self, qty: i32) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(Decimal::from(qty))
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Money::new(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Money::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        Money::new(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_two_places() {
        let m = Money::new(dec!(10.005));
        // Banker's rounding: 10.005 -> 10.00
        assert_eq!(m.amount(), dec!(10.00));

        let m = Money::new(dec!(10.015));
        assert_eq!(m.amount(), dec!(10.02));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-b).amount(), dec!(-50.00));
    }

    #[test]
    fn test_mul_qty() {
        let unit = Money::new(dec!(2.99));
        assert_eq!(unit.checked_mul_qty(3).unwrap().amount(), dec!(8.97));
    }

    #[test]
    fn test_sum() {
        let total: Money = [dec!(10.00), dec!(5.50), dec!(0.25)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(15.75));
    }

    #[test]
    fn test_display_always_two_places() {
        assert_eq!(Money::new(dec!(5)).to_string(), "5.00");
        assert_eq!(Money::new(dec!(-5.5)).to_string(), "-5.50");
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let m = Money::new(dec!(20.00));
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"20.00\"");

        let back: Money = serde_json::from_str("\"15.75\"").unwrap();
        assert_eq!(back.amount(), dec!(15.75));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_minor(100).is_positive());
        assert!(Money::from_minor(-100).is_negative());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);
            let mc = Money::from_minor(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn mul_qty_matches_repeated_addition(
            cents in 0i64..100_000i64,
            qty in 1i32..50i32
        ) {
            let unit = Money::from_minor(cents);
            let by_mul = unit.checked_mul_qty(qty).unwrap();
            let by_add: Money = std::iter::repeat(unit).take(qty as usize).sum();

            prop_assert_eq!(by_mul, by_add);
        }
    }
}
