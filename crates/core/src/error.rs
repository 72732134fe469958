//! Ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::Currency;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a deterministic rejection of caller input. Operations return one
/// of these *before* touching any state, so a failed call never leaves a wallet or
/// product half-updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A negative amount was supplied where a non-negative one is required.
    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },

    /// A currency code outside the recognized set.
    #[error("invalid currency: {code:?}")]
    InvalidCurrency { code: String },

    /// A product kind outside the recognized set.
    #[error("invalid product type: {kind:?}")]
    InvalidType { kind: String },

    #[error("price cannot be negative ({currency} {price})")]
    NegativePrice { currency: Currency, price: Decimal },

    /// The currency is recognized but the product carries no price for it.
    #[error("currency {currency} not available for this product")]
    CurrencyUnavailable { currency: Currency },

    /// Two wallets involved in one operation hold different currencies.
    #[error("cannot move funds between currencies (expected {expected}, found {found})")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// A purchase was attempted in a currency the product is not sold in.
    #[error("cannot buy {product:?} with a {currency} wallet")]
    CurrencyUnsupported { currency: Currency, product: String },

    #[error("insufficient funds (requested {requested}, available {available})")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// A distribution was requested with nobody to receive it.
    #[error("no recipients to distribute to")]
    NoRecipients,

    /// The result of an amount computation does not fit in a `Decimal`.
    #[error("amount overflow in {context}")]
    AmountOverflow { context: &'static str },
}

impl LedgerError {
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    pub fn invalid_type(kind: impl Into<String>) -> Self {
        Self::InvalidType { kind: kind.into() }
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn currency_mismatch(expected: Currency, found: Currency) -> Self {
        Self::CurrencyMismatch { expected, found }
    }

    pub fn overflow(context: &'static str) -> Self {
        Self::AmountOverflow { context }
    }
}
