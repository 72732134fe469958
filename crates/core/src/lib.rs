//! `pocketledger-core` — shared ledger building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the recognized currency and product-kind sets, amount helpers,
//! VAT configuration and typed identifiers.

pub mod amount;
pub mod config;
pub mod currency;
pub mod entity;
pub mod error;
pub mod id;
pub mod kind;
pub mod value_object;

pub use amount::{ensure_non_negative, round_to_minor_units, truncate_to_minor_units};
pub use config::VatSchedule;
pub use currency::Currency;
pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::{PersonId, ProductId, TransactionId, WalletId};
pub use kind::ProductKind;
pub use value_object::ValueObject;

pub use rust_decimal::Decimal;
