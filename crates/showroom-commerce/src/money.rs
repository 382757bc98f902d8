//! Money type for representing monetary values.
//!
//! Amounts are stored as integers in the smallest unit of the currency, which
//! avoids the floating-point precision issues that plague monetary code. The
//! storefront prices in Vietnamese đồng, which has no fractional unit, so the
//! stored amount usually is the display amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "đ").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{0111}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            _ => 2,
        }
    }

    /// Whether the symbol trails the amount ("450.000đ" rather than "$4.50").
    pub fn symbol_trails(&self) -> bool {
        matches!(self, Currency::VND)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "VND" => Some(Currency::VND),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is in the smallest currency unit and may be negative in
/// intermediate arithmetic; catalog prices are validated non-negative at the
/// decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a VND amount.
    pub fn vnd(amount: i64) -> Self {
        Self::new(amount, Currency::VND)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "450000đ" or "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        if self.currency.symbol_trails() {
            format!("{:.places$}{}", decimal, self.currency.symbol())
        } else {
            format!("{}{:.places$}", self.currency.symbol(), decimal)
        }
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::vnd(450_000_000);
        assert_eq!(m.amount, 450_000_000);
        assert_eq!(m.currency, Currency::VND);
    }

    #[test]
    fn test_money_display_vnd() {
        let m = Money::vnd(450000);
        assert_eq!(m.display(), "450000\u{0111}");
    }

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::vnd(1000);
        let b = Money::vnd(500);
        let c = a.try_add(&b).unwrap();
        assert_eq!(c.amount, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::vnd(1000);
        let b = Money::vnd(300);
        let c = a.try_subtract(&b).unwrap();
        assert_eq!(c.amount, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::vnd(1000);
        assert_eq!(m.try_multiply(3).unwrap().amount, 3000);
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::vnd(i64::MAX);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let vnd = Money::vnd(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(vnd.try_add(&usd).is_none());
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::vnd(100), Money::vnd(200), Money::vnd(300)];
        let total = Money::try_sum(items.iter(), Currency::VND).unwrap();
        assert_eq!(total.amount, 600);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("vnd"), Some(Currency::VND));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
