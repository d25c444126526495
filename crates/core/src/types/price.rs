//! Rupiah price type backed by decimal arithmetic.
//!
//! All monetary amounts in the system are Indonesian rupiah. Catalog prices
//! are whole rupiah, but derived amounts (the 10% tax line) can carry a
//! fraction, so the inner representation is a [`Decimal`] rather than an
//! integer. Arithmetic on `Decimal` is exact, which is what makes
//! `total == subtotal + tax + shipping` hold to the last digit.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A rupiah amount.
///
/// Construct catalog prices with [`Price::from_rupiah`]; derived amounts
/// (tax) come from [`Price::new`]. Negative amounts are unrepresentable
/// through `from_rupiah`, which is the constructor all catalog input goes
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupiah.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-rupiah amount.
    #[must_use]
    pub fn from_rupiah(rupiah: u64) -> Self {
        Self(Decimal::from(rupiah))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line total: this unit price times a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Formats as `Rp 15.000` with Indonesian digit grouping. Fractional
    /// amounts keep two decimal places after a comma (`Rp 1.500,50`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        let whole = normalized.trunc();
        let fraction = normalized - whole;

        let digits = whole.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if normalized.is_sign_negative() { "-" } else { "" };
        if fraction.is_zero() {
            write!(f, "Rp {sign}{grouped}")
        } else {
            let cents = (fraction.abs() * Decimal::from(100))
                .round()
                .to_u32()
                .unwrap_or(0);
            write!(f, "Rp {sign}{grouped},{cents:02}")
        }
    }
}
