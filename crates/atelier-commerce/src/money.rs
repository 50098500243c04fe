//! Money type for prices and totals.
//!
//! Amounts are stored in the smallest currency unit (cents) as an `i64`,
//! avoiding the float drift that creeps into repeated price arithmetic.
//! Derived totals use saturating arithmetic so reading them is a total
//! operation; fallible `try_*` variants exist where a caller wants to see
//! the overflow instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    SAR,
    AED,
}

impl Currency {
    /// The ISO currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SAR => "SAR",
            Currency::AED => "AED",
        }
    }

    /// The display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::SAR => "SAR ",
            Currency::AED => "AED ",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "SAR" => Some(Currency::SAR),
            "AED" => Some(Currency::AED),
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a value from a decimal amount.
    ///
    /// ```
    /// use atelier_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(79.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 7999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert back to a decimal amount.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Add, returning `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Subtract, returning `None` on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Add, clamping at the representable range. Currency mismatch keeps `self`.
    pub fn saturating_add(&self, other: &Money) -> Money {
        if self.currency != other.currency {
            return *self;
        }
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a scalar, clamping at the representable range.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Format with symbol (e.g., "$79.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
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
    fn test_from_decimal() {
        let m = Money::from_decimal(79.99, Currency::USD);
        assert_eq!(m.amount_cents, 7999);
    }

    #[test]
    fn test_to_decimal() {
        let m = Money::new(7999, Currency::USD);
        assert!((m.to_decimal() - 79.99).abs() < 0.001);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(7999, Currency::USD).display(), "$79.99");
        assert_eq!(Money::new(500, Currency::GBP).display(), "\u{00a3}5.00");
    }

    #[test]
    fn test_try_add() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::USD)));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert_eq!(usd.try_add(&eur), None);
        assert_eq!(usd.try_subtract(&eur), None);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert_eq!(m.try_multiply(2), None);
    }

    #[test]
    fn test_saturating_arithmetic() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert_eq!(m.saturating_multiply(2).amount_cents, i64::MAX);
        assert_eq!(
            m.saturating_add(&Money::new(1, Currency::USD)).amount_cents,
            i64::MAX
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("SAR"), Some(Currency::SAR));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
