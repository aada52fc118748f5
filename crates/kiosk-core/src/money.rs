//! # Money Module
//!
//! Provides the `Money` type for menu prices, customization surcharges and
//! cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing menu prices as floats:                                         │
//! │    5.99 + 0.50 + 0.50 = 6.989999999999999  ❌                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    599 + 50 + 50 = 699 cents → "6.99"                                   │
//! │    The running total is exact; formatting never has to round.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Arithmetic saturates at the `i64` bounds; it never wraps or panics.
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! let burger = Money::from_cents(599); // $5.99
//! let total = burger * 2u32 + Money::from_cents(100);
//! assert_eq!(total.to_decimal_string(), "12.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price_cents ──┬──► CartLine.price (base + surcharge, frozen)
///                        │            │
/// Selection.price_cents ─┘            ▼
///                              CartLine.line_total ──► CartStore::total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_cents(599);
    /// assert_eq!(price.cents(), 599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a line quantity, saturating on overflow.
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let line_total = Money::from_cents(599).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 1797);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount as a plain decimal with two fraction digits.
    ///
    /// This is the checkout total format: no currency symbol, always two
    /// digits after the point.
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1198).to_decimal_string(), "11.98");
    /// assert_eq!(Money::zero().to_decimal_string(), "0.00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with a dollar sign. The terminal app formats with its
/// configured symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(599)), "$5.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1298).to_decimal_string(), "12.98");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(-101).to_decimal_string(), "-1.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum_is_exact() {
        // 5.99 + 0.50 + 0.50 drifts as f64; as cents it does not
        let parts = [
            Money::from_cents(599),
            Money::from_cents(50),
            Money::from_cents(50),
        ];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total.to_decimal_string(), "6.99");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
        assert_eq!(Money::default().cents(), 0);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(5_000_000_000_000_000_000);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!(huge.multiply_quantity(4_000_000_000).cents(), i64::MAX);
        assert_eq!(Money::from_cents(-huge.cents()).multiply_quantity(3).cents(), i64::MIN);

        let total: Money = [huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!(total.to_decimal_string(), "92233720368547758.07");
    }
}
