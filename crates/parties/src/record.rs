//! Records of completed value movements.
//!
//! Records are immutable facts returned by [`Person`](crate::Person) operations.
//! They are plain data: serializable and safe to keep after the entities change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pocketledger_core::{Currency, PersonId, ProductId, TransactionId};

/// Funds moved from one person's wallet to another's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: TransactionId,
    pub from: PersonId,
    pub to: PersonId,
    pub currency: Currency,
    pub amount: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// A product bought out of a person's wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: TransactionId,
    pub buyer: PersonId,
    pub product: ProductId,
    pub product_name: String,
    pub currency: Currency,
    /// Amount debited from the wallet (the product's unit price).
    pub amount: Decimal,
    /// VAT rate of the product at purchase time. Recorded only; not charged.
    pub vat_rate: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// A wallet balance split evenly between several people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: TransactionId,
    pub source: PersonId,
    pub currency: Currency,
    /// Source balance before the split.
    pub total: Decimal,
    /// Amount each participant received.
    pub share: Decimal,
    /// Minor-unit leftover kept by the source.
    pub remainder: Decimal,
    /// Everyone who received a share, in call order. Includes the source when it
    /// took part in the split.
    pub recipients: Vec<PersonId>,
    pub occurred_at: DateTime<Utc>,
}

impl Division {
    pub fn participant_count(&self) -> usize {
        self.recipients.len()
    }
}
