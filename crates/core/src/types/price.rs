//! Type-safe price representation using decimal arithmetic.
//!
//! Prices persist as plain JSON numbers, so the serde representation
//! goes through [`rust_decimal::serde::float`] rather than the default
//! string form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in the store's single display currency.
///
/// Arithmetic is exact decimal arithmetic; display-time rounding to
/// two places happens only in [`Price::fmt`] and in the rendering
/// layer. Totals returned by the cart are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a price out of displayed text such as `"$1,299.99"` or
    /// `"After Discount: $89.00"`.
    ///
    /// Every character other than an ASCII digit or a decimal point is
    /// stripped before parsing. Text with no parseable amount yields
    /// [`Price::ZERO`].
    #[must_use]
    pub fn from_display_text(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        cleaned.parse().map_or(Self::ZERO, Self)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl core::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, core::ops::Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
