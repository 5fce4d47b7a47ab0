//! # Money Module
//!
//! Integer-cents monetary type for order-value totals.
//!
//! ## Why Integer Money?
//! Floating point cannot represent most decimal prices exactly, and logistics
//! summaries add up hundreds of line values. All monetary values in Atlas are
//! kept in cents (i64); only the UI converts to a display currency.
//!
//! ## Usage
//! ```rust
//! use atlas_core::money::Money;
//!
//! let unit_price = Money::from_cents(1099); // 10.99
//! let line_value = unit_price.line_value(3);
//! assert_eq!(line_value.cents(), 3297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that credit lines and corrections can be represented; the
/// engine itself only ever produces non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extends a unit price to a line value (unit price × quantity).
    ///
    /// ## Example
    /// ```rust
    /// use atlas_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250);
    /// assert_eq!(unit_price.line_value(100).cents(), 25_000);
    /// ```
    #[inline]
    pub const fn line_value(&self, quantity: i64) -> Self {
        Money(self.0 * quantity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the value in major.minor form for debugging.
/// UI display formatting (currency symbol, locale) happens in the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summing an iterator of line values into an order total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
