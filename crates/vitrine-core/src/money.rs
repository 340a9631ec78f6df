//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that summing a page of
//! prices never accumulates floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use thiserror::Error;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Number of decimal places. All supported currencies use two.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
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

/// Formatting locale for monetary display strings.
///
/// Fixed configuration, never auto-detected from the environment, so a
/// given price always renders to the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Brazilian Portuguese: `R$ 1.234,56`.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English: `$1,234.56`.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Get the (grouping, decimal) separator pair.
    pub fn separators(&self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }

    /// Whether a space separates the symbol from the amount.
    pub fn spaced_symbol(&self) -> bool {
        matches!(self, Locale::PtBr)
    }

    /// Get the BCP 47 tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_core::money::{Currency, Money};
    /// let price = Money::from_decimal(19.9, Currency::BRL);
    /// assert_eq!(price.amount_cents, 1990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("Currency mismatch in addition")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency.code(), self.to_decimal())
    }
}

/// Error parsing a formatted money string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("unparseable money value: {0:?}")]
    Invalid(String),
}

/// Deterministic currency formatter for a fixed currency/locale pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormat {
    currency: Currency,
    locale: Locale,
}

impl PriceFormat {
    /// Create a formatter for the given currency and locale.
    pub fn new(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }

    /// The currency this formatter renders.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The locale this formatter renders in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format a monetary value (e.g., `R$ 1.234,56` for pt-BR/BRL).
    pub fn format(&self, amount: Money) -> String {
        let (group_sep, decimal_sep) = self.locale.separators();
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);

        let cents = amount.amount_cents.unsigned_abs();
        let whole = cents / divisor as u64;
        let frac = cents % divisor as u64;

        let mut out = String::new();
        if amount.amount_cents < 0 {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        if self.locale.spaced_symbol() {
            out.push(' ');
        }
        out.push_str(&group_thousands(whole, group_sep));
        out.push(decimal_sep);
        out.push_str(&format!("{:0width$}", frac, width = places as usize));
        out
    }

    /// Parse a string previously produced by [`format`](Self::format).
    ///
    /// Tolerates missing symbol and grouping; the decimal separator and
    /// digit layout must match the locale.
    pub fn parse(&self, text: &str) -> Result<Money, MoneyParseError> {
        let (group_sep, decimal_sep) = self.locale.separators();
        let places = self.currency.decimal_places() as usize;

        let mut rest = text.trim();
        let negative = rest.starts_with('-');
        if negative {
            rest = rest[1..].trim_start();
        }
        rest = rest
            .strip_prefix(self.currency.symbol())
            .unwrap_or(rest)
            .trim_start();

        let mut whole = String::new();
        let mut frac = String::new();
        let mut in_frac = false;
        for c in rest.chars() {
            if c.is_ascii_digit() {
                if in_frac {
                    frac.push(c);
                } else {
                    whole.push(c);
                }
            } else if c == decimal_sep && !in_frac {
                in_frac = true;
            } else if c == group_sep && !in_frac {
                // grouping separator, skip
            } else {
                return Err(MoneyParseError::Invalid(text.to_string()));
            }
        }

        if whole.is_empty() || frac.len() > places {
            return Err(MoneyParseError::Invalid(text.to_string()));
        }
        while frac.len() < places {
            frac.push('0');
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| MoneyParseError::Invalid(text.to_string()))?;
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            frac.parse()
                .map_err(|_| MoneyParseError::Invalid(text.to_string()))?
        };

        let mut cents = whole * 10_i64.pow(places as u32) + frac;
        if negative {
            cents = -cents;
        }
        Ok(Money::new(cents, self.currency))
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::new(Currency::BRL, Locale::PtBr)
    }
}

/// Insert a grouping separator every three digits from the right.
fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl() -> PriceFormat {
        PriceFormat::new(Currency::BRL, Locale::PtBr)
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(19.9, Currency::BRL);
        assert_eq!(m.amount_cents, 1990);

        let m = Money::from_decimal(5.25, Currency::USD);
        assert_eq!(m.amount_cents, 525);
    }

    #[test]
    fn test_money_sum_is_exact() {
        let prices = vec![
            Money::from_decimal(10.5, Currency::BRL),
            Money::from_decimal(5.25, Currency::BRL),
        ];
        let total = Money::sum(prices.iter(), Currency::BRL);
        assert_eq!(total.amount_cents, 1575);
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let a = Money::new(100, Currency::BRL);
        let b = Money::new(100, Currency::USD);
        assert_eq!(a.try_add(&b), None);
    }

    #[test]
    fn test_format_pt_br() {
        assert_eq!(brl().format(Money::new(1990, Currency::BRL)), "R$ 19,90");
        assert_eq!(brl().format(Money::new(0, Currency::BRL)), "R$ 0,00");
        assert_eq!(
            brl().format(Money::new(123_456, Currency::BRL)),
            "R$ 1.234,56"
        );
        assert_eq!(
            brl().format(Money::new(1_234_567_890, Currency::BRL)),
            "R$ 12.345.678,90"
        );
    }

    #[test]
    fn test_format_en_us() {
        let fmt = PriceFormat::new(Currency::USD, Locale::EnUs);
        assert_eq!(fmt.format(Money::new(1990, Currency::USD)), "$19.90");
        assert_eq!(fmt.format(Money::new(123_456, Currency::USD)), "$1,234.56");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(brl().format(Money::new(-500, Currency::BRL)), "-R$ 5,00");
    }

    #[test]
    fn test_parse_round_trip() {
        let fmt = brl();
        for cents in [0, 1, 99, 100, 1990, 123_456, 98_765_432] {
            let money = Money::new(cents, Currency::BRL);
            assert_eq!(fmt.parse(&fmt.format(money)), Ok(money));
        }
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(
            brl().parse("1.234,56"),
            Ok(Money::new(123_456, Currency::BRL))
        );
        assert_eq!(brl().parse("19,9"), Ok(Money::new(1990, Currency::BRL)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(brl().parse("abc").is_err());
        assert!(brl().parse("R$ 19,901").is_err());
        assert!(brl().parse("").is_err());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("brl"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
