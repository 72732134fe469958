use rust_decimal::Decimal;
use serde::Serialize;

use pocketledger_core::{Currency, LedgerError, LedgerResult};

/// Insertion-ordered prices, at most one per currency.
///
/// Only [`PriceList::stage`] + [`PriceList::apply`] write to it, which keeps every
/// stored price non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceList {
    entries: Vec<(Currency, Decimal)>,
}

/// Validated price updates, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPrices(Vec<(Currency, Decimal)>);

impl PriceList {
    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, price)| *price)
    }

    /// Currencies in the order they were first priced.
    pub fn currencies(&self) -> Vec<Currency> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    pub fn entries(&self) -> &[(Currency, Decimal)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate raw `(code, price)` pairs without touching any price list.
    ///
    /// Unrecognized codes are dropped. The first negative price aborts the whole
    /// batch with [`LedgerError::NegativePrice`].
    pub fn stage<I, S>(prices: I) -> LedgerResult<StagedPrices>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut staged = Vec::new();
        for (code, price) in prices {
            let code = code.as_ref();
            let Ok(currency) = code.parse::<Currency>() else {
                tracing::debug!(code, "skipping price in unrecognized currency");
                continue;
            };
            if price < Decimal::ZERO {
                return Err(LedgerError::NegativePrice { currency, price });
            }
            staged.push((currency, price));
        }
        Ok(StagedPrices(staged))
    }

    /// Write staged prices. Existing currencies keep their position; new ones are
    /// appended.
    pub fn apply(&mut self, staged: StagedPrices) {
        for (currency, price) in staged.0 {
            match self.entries.iter_mut().find(|(c, _)| *c == currency) {
                Some(entry) => entry.1 = price,
                None => self.entries.push((currency, price)),
            }
        }
    }
}
