//! Monetary values as they travel on the wire.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Currencies accepted by the payments API.
///
/// Endpoints that predate multi-currency support omit the code entirely;
/// that state is modelled as `Option<CurrencyCode>` at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    AUD,
    ZAR,
    CHF,
    NOK,
    DKK,
    SEK,
    NZD,
    HKD,
}

impl CurrencyCode {
    /// Returns the ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::ZAR => "ZAR",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::NOK => "NOK",
            CurrencyCode::DKK => "DKK",
            CurrencyCode::SEK => "SEK",
            CurrencyCode::NZD => "NZD",
            CurrencyCode::HKD => "HKD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::USD),
            "EUR" => Ok(CurrencyCode::EUR),
            "GBP" => Ok(CurrencyCode::GBP),
            "JPY" => Ok(CurrencyCode::JPY),
            "AUD" => Ok(CurrencyCode::AUD),
            "ZAR" => Ok(CurrencyCode::ZAR),
            "CHF" => Ok(CurrencyCode::CHF),
            "NOK" => Ok(CurrencyCode::NOK),
            "DKK" => Ok(CurrencyCode::DKK),
            "SEK" => Ok(CurrencyCode::SEK),
            "NZD" => Ok(CurrencyCode::NZD),
            "HKD" => Ok(CurrencyCode::HKD),
            other => Err(RequestError::UnknownCurrency(other.to_string())),
        }
    }
}

/// An amount paired with its currency code.
///
/// The amount is kept as the literal decimal string from the caller or the
/// response body. It is never parsed into a float, so `"0.99"` stays `"0.99"`
/// and `"500"` does not become `"500.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    amount: String,
    currency_code: String,
}

impl Price {
    /// Creates a price from an amount string and a currency code string.
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Creates a price with a currency from the supported set.
    pub fn with_currency(amount: impl Into<String>, currency: CurrencyCode) -> Self {
        Self::new(amount, currency.as_str())
    }

    /// Returns the decimal amount exactly as given.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Returns the currency code exactly as given.
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Returns the currency when it belongs to the supported set.
    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency_code.parse().ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}
