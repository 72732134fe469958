//! VAT configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the reduced (food) VAT rate.
pub const VAT_REDUCED_ENV: &str = "POCKETLEDGER_VAT_REDUCED";
/// Environment variable overriding the standard VAT rate.
pub const VAT_STANDARD_ENV: &str = "POCKETLEDGER_VAT_STANDARD";

/// Two-tier VAT schedule, expressed as fractions (`0.10` = 10%).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatSchedule {
    /// Rate applied to food.
    pub reduced: Decimal,
    /// Rate applied to every other product kind.
    pub standard: Decimal,
}

impl Default for VatSchedule {
    fn default() -> Self {
        Self {
            reduced: dec!(0.10),
            standard: dec!(0.20),
        }
    }
}

impl VatSchedule {
    /// Build from the process environment, falling back to the defaults per rate.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (same rules as [`VatSchedule::from_env`]).
    ///
    /// Values that fail to parse, or are negative, are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            reduced: read_rate(&lookup, VAT_REDUCED_ENV).unwrap_or(defaults.reduced),
            standard: read_rate(&lookup, VAT_STANDARD_ENV).unwrap_or(defaults.standard),
        }
    }

    pub fn with_reduced(mut self, rate: Decimal) -> Self {
        self.reduced = rate;
        self
    }

    pub fn with_standard(mut self, rate: Decimal) -> Self {
        self.standard = rate;
        self
    }
}

fn read_rate(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Decimal> {
    let raw = lookup(key)?;
    match raw.trim().parse::<Decimal>() {
        Ok(rate) if rate >= Decimal::ZERO => Some(rate),
        Ok(rate) => {
            tracing::warn!(key, %rate, "negative VAT rate ignored; using default");
            None
        }
        Err(e) => {
            tracing::warn!(
                key,
                value = %raw,
                error = %e,
                "unparsable VAT rate ignored; using default"
            );
            None
        }
    }
}
