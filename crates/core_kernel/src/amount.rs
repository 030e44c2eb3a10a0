//! Amounts as carried by postings and balance assertions
//!
//! Ledger units are a decimal number paired with a commodity symbol. Any
//! commodity is accepted (`GBP`, `USD`, `HOOL`, ...), so the commodity is a
//! validated string rather than a closed currency enum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building an amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid commodity: {0:?}")]
    InvalidCommodity(String),
}

/// A commodity or currency symbol such as `GBP`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commodity(String);

impl Commodity {
    /// Creates a commodity, rejecting empty or whitespace-bearing symbols
    pub fn new(symbol: impl Into<String>) -> Result<Self, AmountError> {
        let symbol = symbol.into();
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(AmountError::InvalidCommodity(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the symbol
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Commodity {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Commodity> for String {
    fn from(commodity: Commodity) -> String {
        commodity.0
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A number of units of a commodity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    number: Decimal,
    currency: Commodity,
}

impl Amount {
    /// Creates a new amount
    pub fn new(number: Decimal, currency: Commodity) -> Self {
        Self { number, currency }
    }

    /// Returns the number of units
    pub fn number(&self) -> Decimal {
        self.number
    }

    /// Returns the commodity
    pub fn currency(&self) -> &Commodity {
        &self.currency
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}
