//! # Money Module
//!
//! Provides the `Price` type for unit prices and cart totals.
//!
//! ## Floating Point, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE ARITHMETIC                                                       │
//! │                                                                         │
//! │  Prices are plain f64 values with standard IEEE-754 semantics:         │
//! │    line total = price × quantity                                        │
//! │    cart total = Σ line totals, summed in cart (insertion) order         │
//! │                                                                         │
//! │  Summation order can change the last bits of a total, e.g.             │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │  There is no currency or rounding model here, so that is acceptable.   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Price;
//!
//! let price = Price::new(12.0);
//! let line_total = price * 3;
//! assert_eq!(line_total.value(), 36.0);
//! assert_eq!(line_total.to_string(), "36");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Price Type
// =============================================================================

/// A unit price or a total, as a plain number with no currency attached.
///
/// ## Design Decisions
/// - **f64**: matches the numeric model of the catalog (14, 12, 4, 0.5 ...)
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **Transparent serde**: serializes as a bare JSON number
///
/// No validation happens here: a negative price is representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a raw number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Price(value)
    }

    /// Returns the raw number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns a zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Price;
    ///
    /// let unit_price = Price::new(4.0);
    /// assert_eq!(unit_price.multiply_quantity(3).value(), 12.0);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Price(self.0 * f64::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal notation: whole numbers print without a fractional part
/// (`14`, not `14.0`). No exponent form is ever used, so very large or very
/// small values print every digit (`1e21` prints as
/// `1000000000000000000000`, `1e-7` as `0.0000001`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price(value)
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Folds left to right, so the result follows iteration order.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
