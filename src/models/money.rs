//! Milliunit amounts
//!
//! YNAB reports every amount in milliunits (thousandths of the currency
//! unit) as a signed integer. Keeping them as i64 avoids floating-point
//! drift while balances are accumulated. Arithmetic saturates at the i64
//! bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbol used by `Display`
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// A monetary amount in milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from raw milliunits
    ///
    /// # Examples
    /// ```
    /// use ynab_risk::models::Milliunits;
    /// let amount = Milliunits::new(12_340); // £12.34
    /// assert_eq!(amount.value(), 12_340);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Create an amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(1000))
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw milliunit value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Format with a currency symbol, e.g. `-£1,234.57`
    ///
    /// Milliunits are rounded half-up to hundredths.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let hundredths = (self.0.unsigned_abs() + 5) / 10;
        let whole = group_thousands(hundredths / 100);
        let fraction = hundredths % 100;
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, whole, fraction)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Milliunits {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl From<i64> for Milliunits {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Milliunits {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Milliunits {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Milliunits {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Milliunits {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Milliunits {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Milliunits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Milliunits::zero(), |acc, m| acc + m)
    }
}
