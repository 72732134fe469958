//! Amount validation and rounding helpers.
//!
//! Amounts are plain `Decimal`s; these helpers keep the sign check and the
//! minor-unit rounding rules in one place.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;
use crate::error::{LedgerError, LedgerResult};

/// Reject negative amounts with [`LedgerError::InvalidAmount`].
pub fn ensure_non_negative(amount: Decimal) -> LedgerResult<Decimal> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::invalid_amount(amount));
    }
    Ok(amount)
}

/// Round to the currency's minor units, midpoint away from zero.
pub fn round_to_minor_units(amount: Decimal, currency: Currency) -> Decimal {
    amount.round_dp_with_strategy(currency.minor_units(), RoundingStrategy::MidpointAwayFromZero)
}

/// Truncate toward zero to the currency's minor units.
pub fn truncate_to_minor_units(amount: Decimal, currency: Currency) -> Decimal {
    amount.round_dp_with_strategy(currency.minor_units(), RoundingStrategy::ToZero)
}
