//! # Money Module
//!
//! Provides the `Money` type for handling prize amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    1000 × 0.9 × 0.1 = 90.00000000000001  ❌                             │
//! │                                                                         │
//! │  Splitting a pool:                                                      │
//! │    100.00 / 3 = 33.33 (×3 = 99.99)  → Lost 0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    10000 / 3 = 3333 (×3 = 9999)                                        │
//! │    We KNOW we lost 1 unit, and report it as rounding_remainder         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use prize_core::money::Money;
//!
//! let fee = Money::from_whole_units(50);
//! let gross = fee.multiply_count(20);
//! assert_eq!(gross, Money::from_whole_units(1000));
//!
//! // Text from a form field
//! let typed: Money = "12,50".parse().unwrap();
//! assert_eq!(typed.minor_units(), 1250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Share;

/// Minor units per whole currency unit (øre per krone, cents per dollar).
pub const MINOR_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction during pool derivation can be checked
///   for going below zero instead of wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as minor units**: the front-end floors for display
///
/// ## Where Money is Used
/// ```text
/// entry_fee × total_players ──► gross_pool
///                                   │
///                 organizer + Friday deductions
///                                   │
///                                   ▼
///                               net_pool ──► PrizeTier.amount_per_player
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use prize_core::money::Money;
    ///
    /// let prize = Money::from_minor_units(16250); // 162.50
    /// assert_eq!(prize.whole_units(), 162);
    /// ```
    #[inline]
    pub const fn from_minor_units(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_whole_units(units: i64) -> Self {
        Money(units * MINOR_PER_UNIT)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_UNIT - minor)
        } else {
            Money(major * MINOR_PER_UNIT + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the value floored to whole currency units.
    ///
    /// This is the display rounding the calculator form uses: a prize of
    /// 162.50 is shown as 162, and -0.50 as -1.
    ///
    /// ```rust
    /// use prize_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor_units(16250).whole_units(), 162);
    /// assert_eq!(Money::from_minor_units(-50).whole_units(), -1);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0.div_euclid(MINOR_PER_UNIT)
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_UNIT).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a head count.
    ///
    /// ## Example
    /// ```rust
    /// use prize_core::money::Money;
    ///
    /// let fee = Money::from_whole_units(50);
    /// assert_eq!(fee.multiply_count(20).whole_units(), 1000);
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }

    /// Multiplies by a head count, or `None` if the result does not fit.
    ///
    /// ```rust
    /// use prize_core::money::Money;
    ///
    /// assert_eq!(Money::from_whole_units(50).checked_multiply_count(20), Some(Money::from_whole_units(1000)));
    /// assert_eq!(Money::from_minor_units(i64::MAX).checked_multiply_count(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_count(&self, count: u32) -> Option<Self> {
        match self.0.checked_mul(count as i64) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Takes a share of this amount, floored to minor units.
    ///
    /// ## Implementation
    /// Integer math in i128: `amount × bps / 10000`, rounded toward
    /// negative infinity so a share is never larger than its exact value.
    ///
    /// ```rust
    /// use prize_core::money::Money;
    /// use prize_core::types::Share;
    ///
    /// let pool = Money::from_whole_units(1000);
    /// assert_eq!(pool.apply_share(Share::from_bps(3500)).whole_units(), 350);
    /// ```
    pub fn apply_share(&self, share: Share) -> Money {
        let minor = (self.0 as i128 * share.bps() as i128).div_euclid(Share::WHOLE as i128);
        Money(minor as i64)
    }

    /// Splits this amount evenly between `count` recipients.
    ///
    /// Returns `(per_recipient, remainder)` where
    /// `per_recipient × count + remainder == self`. A count of zero gives
    /// nothing to anyone and leaves the whole amount as remainder.
    ///
    /// ```rust
    /// use prize_core::money::Money;
    ///
    /// let (each, left) = Money::from_minor_units(10000).split_evenly(3);
    /// assert_eq!(each.minor_units(), 3333);
    /// assert_eq!(left.minor_units(), 1);
    /// ```
    pub fn split_evenly(&self, count: u32) -> (Money, Money) {
        if count == 0 {
            return (Money::zero(), *self);
        }
        let count = count as i64;
        let each = self.0.div_euclid(count);
        (Money(each), Money(self.0 - each * count))
    }

    /// Parses decimal text typed into a form field.
    ///
    /// Accepts whole units ("50") and up to two decimals with either a dot
    /// or a comma separator ("12.5", "12,50"). `field` names the input in
    /// the returned error.
    pub fn parse_field(text: &str, field: &str) -> Result<Money, ValidationError> {
        let text = text.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        let (whole, fraction) = match text.find(|c: char| c == '.' || c == ',') {
            Some(idx) => (&text[..idx], &text[idx + 1..]),
            None => (text, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("not a number"));
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimals are allowed"));
        }

        let units: i64 = whole.parse().map_err(|_| invalid("number is too large"))?;
        let minor = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("not a number"))? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid("not a number"))?,
        };

        units
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("number is too large"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the exact amount with two decimals and no currency symbol.
///
/// ## Note
/// Front-ends floor to whole units and add their own currency suffix.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            (self.0 / MINOR_PER_UNIT).abs(),
            self.minor_part()
        )
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_field(s, "amount")
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
