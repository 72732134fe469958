//! Recognized product kinds.

use core::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::VatSchedule;
use crate::error::LedgerError;
use crate::value_object::ValueObject;

/// Product category. Determines which VAT tier applies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Food,
    Tech,
    Electronics,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [
        ProductKind::Food,
        ProductKind::Tech,
        ProductKind::Electronics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Food => "food",
            ProductKind::Tech => "tech",
            ProductKind::Electronics => "electronics",
        }
    }

    /// VAT rate for this kind: food takes the reduced tier, everything else the
    /// standard tier.
    pub fn vat_rate(self, schedule: &VatSchedule) -> Decimal {
        match self {
            ProductKind::Food => schedule.reduced,
            ProductKind::Tech | ProductKind::Electronics => schedule.standard,
        }
    }
}

impl ValueObject for ProductKind {}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| LedgerError::invalid_type(s))
    }
}
