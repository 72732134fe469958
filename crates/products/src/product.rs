use rust_decimal::Decimal;
use serde::Serialize;

use pocketledger_core::{
    round_to_minor_units, Currency, Entity, LedgerError, LedgerResult, ProductId, ProductKind,
    VatSchedule,
};

use crate::price_list::PriceList;

/// A purchasable product.
///
/// Invariants:
/// - every stored price is `>= 0` and keyed by a recognized currency
/// - `kind` is always a recognized [`ProductKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    kind: ProductKind,
    prices: PriceList,
    #[serde(skip)]
    vat: VatSchedule,
}

impl Product {
    /// Create a product priced with the default VAT schedule.
    ///
    /// Prices in unrecognized currencies are dropped; a negative price or an
    /// unknown kind rejects the whole product.
    pub fn new<I, S>(name: impl Into<String>, prices: I, kind: &str) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let kind = kind.parse::<ProductKind>()?;
        let staged = PriceList::stage(prices)?;

        let mut price_list = PriceList::default();
        price_list.apply(staged);

        Ok(Self {
            id: ProductId::new(),
            name: name.into(),
            kind,
            prices: price_list,
            vat: VatSchedule::default(),
        })
    }

    /// Use a different VAT schedule for [`Product::vat_rate`].
    pub fn with_vat_schedule(mut self, vat: VatSchedule) -> Self {
        self.vat = vat;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Priced currencies, in insertion order.
    pub fn list_currencies(&self) -> Vec<Currency> {
        self.prices.currencies()
    }

    pub fn set_kind(&mut self, kind: &str) -> LedgerResult<()> {
        self.kind = kind.parse()?;
        tracing::debug!(product = %self.id, kind = %self.kind, "product kind set");
        Ok(())
    }

    /// Merge new prices into the price list.
    ///
    /// All entries are validated before any is written: a single negative price
    /// leaves every existing price untouched.
    pub fn set_prices<I, S>(&mut self, prices: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let staged = PriceList::stage(prices)?;
        self.prices.apply(staged);
        tracing::debug!(product = %self.id, currencies = self.prices.len(), "prices updated");
        Ok(())
    }

    /// Unit price (VAT excluded) in the given currency.
    pub fn price(&self, code: &str) -> LedgerResult<Decimal> {
        let currency = code.parse::<Currency>()?;
        self.price_in(currency)
    }

    /// Typed variant of [`Product::price`].
    pub fn price_in(&self, currency: Currency) -> LedgerResult<Decimal> {
        self.prices
            .get(currency)
            .ok_or(LedgerError::CurrencyUnavailable { currency })
    }

    /// VAT rate for this product's kind.
    pub fn vat_rate(&self) -> Decimal {
        self.kind.vat_rate(&self.vat)
    }

    /// Unit price with VAT added, rounded to the currency's minor units.
    ///
    /// Fails with `AmountOverflow` when the gross price does not fit in a `Decimal`.
    pub fn price_with_vat(&self, code: &str) -> LedgerResult<Decimal> {
        let currency = code.parse::<Currency>()?;
        let net = self.price_in(currency)?;
        let gross = Decimal::ONE
            .checked_add(self.vat_rate())
            .and_then(|factor| net.checked_mul(factor))
            .ok_or_else(|| LedgerError::overflow("VAT-inclusive price"))?;
        Ok(round_to_minor_units(gross, currency))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
