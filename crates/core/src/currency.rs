//! Recognized currencies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::value_object::ValueObject;

/// A currency the ledger accepts.
///
/// This enum *is* the recognized set: wallets and product price lists both validate
/// against it, so there is no second list to keep in sync. Codes outside it (e.g.
/// `"GBP"`) are rejected at parse time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    /// Every recognized currency, in declaration order.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Number of fractional digits in the currency's minor unit.
    pub fn minor_units(self) -> u32 {
        match self {
            Currency::Usd | Currency::Eur => 2,
        }
    }

    pub fn is_recognized(code: &str) -> bool {
        Self::ALL.iter().any(|c| c.code() == code)
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    /// Codes are matched exactly (`"usd"` is not recognized).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| LedgerError::invalid_currency(s))
    }
}

impl TryFrom<&str> for Currency {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
