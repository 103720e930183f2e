//! Supported display currencies and amount formatting
//!
//! Amounts are never converted between currencies; the currency preference
//! only changes how a stored amount is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// A display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Idr,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Krw,
    Sgd,
    Myr,
    Thb,
}

impl Currency {
    /// All supported currencies, in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Usd,
            Self::Idr,
            Self::Eur,
            Self::Gbp,
            Self::Jpy,
            Self::Cny,
            Self::Krw,
            Self::Sgd,
            Self::Myr,
            Self::Thb,
        ]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Idr => "IDR",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
            Self::Krw => "KRW",
            Self::Sgd => "SGD",
            Self::Myr => "MYR",
            Self::Thb => "THB",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Idr => "Indonesian Rupiah",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Jpy => "Japanese Yen",
            Self::Cny => "Chinese Yuan",
            Self::Krw => "South Korean Won",
            Self::Sgd => "Singapore Dollar",
            Self::Myr => "Malaysian Ringgit",
            Self::Thb => "Thai Baht",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Idr => "Rp",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy | Self::Cny => "¥",
            Self::Krw => "₩",
            Self::Sgd => "S$",
            Self::Myr => "RM",
            Self::Thb => "฿",
        }
    }

    /// Number of fraction digits shown when formatting
    pub fn fraction_digits(&self) -> u8 {
        match self {
            Self::Idr => 0,
            _ => 2,
        }
    }

    /// Look up a currency by its code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Render an amount with symbol, thousands separators and this
    /// currency's fraction digits
    ///
    /// # Examples
    /// ```
    /// use finota::models::{Currency, Money};
    /// let amount = Money::from_cents(123450);
    /// assert_eq!(Currency::Usd.format(amount), "$1,234.50");
    /// assert_eq!(Currency::Idr.format(amount), "Rp1,235");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let cents = amount.cents().unsigned_abs();

        let (body, is_zero) = match self.fraction_digits() {
            0 => {
                // round half away from zero
                let units = (cents + 50) / 100;
                (group_thousands(units), units == 0)
            }
            _ => (
                format!("{}.{:02}", group_thousands(cents / 100), cents % 100),
                cents == 0,
            ),
        };

        let sign = if amount.is_negative() && !is_zero { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol(), body)
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

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<_> = Self::all().iter().map(|c| c.code()).collect();
            format!("Unsupported currency '{}': expected one of {}", s, codes.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_changes_with_currency() {
        let amount = Money::from_cents(123450);
        assert_eq!(Currency::Usd.format(amount), "$1,234.50");
        assert_eq!(Currency::Idr.format(amount), "Rp1,235");
        assert_eq!(Currency::Eur.format(amount), "€1,234.50");
        assert_eq!(Currency::Myr.format(amount), "RM1,234.50");
    }

    #[test]
    fn test_format_negative_and_small() {
        assert_eq!(Currency::Usd.format(Money::from_cents(-450)), "-$4.50");
        assert_eq!(Currency::Usd.format(Money::zero()), "$0.00");
        assert_eq!(Currency::Idr.format(Money::from_cents(-40)), "Rp0");
        assert_eq!(Currency::Idr.format(Money::from_cents(-150)), "-Rp2");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("idr"), Some(Currency::Idr));
        assert_eq!(Currency::from_code(" THB "), Some(Currency::Thb));
        assert_eq!(Currency::from_code("BTC"), None);
        assert!("BTC".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Krw).unwrap(), "\"KRW\"");
        let parsed: Currency = serde_json::from_str("\"SGD\"").unwrap();
        assert_eq!(parsed, Currency::Sgd);
    }
}
