//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A receipt that says "$45.000000000000004" is not a receipt.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every catalog price and every ticket total is an exact i64 in the    │
//! │    smallest currency unit. Dollars only exist at display time.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use turnstile_core::money::Money;
//!
//! // Create from cents (the only way in)
//! let base = Money::from_cents(3000);   // $30.00
//! let extra = Money::from_cents(1000);  // $10.00
//!
//! // Ticket totals are plain integer addition
//! let total = base + extra;
//! assert_eq!(total.cents(), 4000);
//!
//! // Display is where the two-decimal dollars appear
//! assert_eq!(total.to_string(), "$40.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for adjustments and refunds in host code, even
///   though ticket pricing itself only ever adds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, so a `Money` serializes as its cents
///
/// ## Where Money Flows
/// ```text
/// Offering.price_in_cents ──► base price + extras ──► PricedTicket.total_cents
///                                                          │
///                            Receipt grand total ◄─────────┘
///                                  │
///                                  ▼
///                            "TOTAL: $175.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use turnstile_core::money::Money;
    ///
    /// let price = Money::from_cents(2500); // Represents $25.00
    /// assert_eq!(price.cents(), 2500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use turnstile_core::money::Money;
    ///
    /// let price = Money::from_cents(2550);
    /// assert_eq!(price.dollars(), 25);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use turnstile_core::money::Money;
    ///
    /// let price = Money::from_cents(2550);
    /// assert_eq!(price.cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use turnstile_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.to_string(), "$0.00");
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with exactly two decimal places.
///
/// This is the formatting the receipt relies on: `3000` renders as `$30.00`
/// and `2550` as `$25.50`, trailing zeros included.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
