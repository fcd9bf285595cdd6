//! # Money Module
//!
//! Provides the `Money` type for catalog prices and cart totals.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront prices are quoted in whole roubles:                         │
//! │                                                                         │
//! │    Ваза Minimalist         19 900 ₽                                     │
//! │    Панно Luxe              52 000 ₽                                     │
//! │                                                                         │
//! │  There is no minor unit to track, so Money is a plain i64 of whole      │
//! │  currency units. Cart math is exact integer multiplication and sum.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decor_core::money::Money;
//!
//! let price = Money::from_units(24_500);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.units(), 49_000);
//!
//! let total: Money = [price, line_total].into_iter().sum();
//! assert_eq!(total.units(), 73_500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as the quantities it is multiplied by
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare number**: clients format it themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// let price = Money::from_units(48_900);
    /// assert_eq!(price.units(), 48_900);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates instead of overflowing: cart quantities have no upper
    /// bound, so a pathological line must not panic the total.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// let unit_price = Money::from_units(48_900);
    /// assert_eq!(unit_price.multiply_quantity(2).units(), 97_800);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain number, no grouping or currency symbol.
///
/// ## Note
/// This is for logs and debugging. Display formatting with grouping and a
/// currency symbol lives in the shell's configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
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
    fn test_from_units() {
        let money = Money::from_units(24_500);
        assert_eq!(money.units(), 24_500);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(122_300)), "122300");
        assert_eq!(format!("{}", Money::zero()), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(24_500);
        let b = Money::from_units(48_900);

        assert_eq!((a + b).units(), 73_400);
        let doubled: Money = b * 2;
        assert_eq!(doubled.units(), 97_800);

        let mut running = Money::zero();
        running += a;
        running += doubled;
        assert_eq!(running.units(), 122_300);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_units(67_800);
        assert_eq!(price.multiply_quantity(i64::MAX).units(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::from_units(19_900)).unwrap();
        assert_eq!(json, "19900");
    }
}
