use rust_decimal::Decimal;
use serde::Serialize;

use pocketledger_core::{
    ensure_non_negative, Currency, Entity, LedgerError, LedgerResult, WalletId,
};

/// A single-currency purse.
///
/// Invariants:
/// - `balance >= 0` at all times
/// - `currency` is always a recognized [`Currency`]
///
/// Every mutating method validates first and only then writes, so an `Err` return
/// means the wallet is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    id: WalletId,
    currency: Currency,
    balance: Decimal,
}

impl Wallet {
    /// Open an empty wallet for a currency code.
    pub fn new(code: &str) -> LedgerResult<Self> {
        Ok(Self::with_currency(code.parse()?))
    }

    /// Open an empty wallet for an already-validated currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            id: WalletId::new(),
            currency,
            balance: Decimal::ZERO,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Replace the balance outright.
    pub fn set_balance(&mut self, amount: Decimal) -> LedgerResult<()> {
        self.balance = ensure_non_negative(amount)?;
        tracing::debug!(wallet = %self.id, balance = %self.balance, "balance set");
        Ok(())
    }

    /// Switch the wallet to another recognized currency.
    ///
    /// The balance is kept as-is; no conversion is applied.
    pub fn set_currency(&mut self, code: &str) -> LedgerResult<()> {
        self.currency = code.parse()?;
        tracing::debug!(wallet = %self.id, currency = %self.currency, "currency set");
        Ok(())
    }

    /// Credit the wallet. Zero is accepted and leaves the balance unchanged.
    pub fn add_fund(&mut self, amount: Decimal) -> LedgerResult<()> {
        self.balance = self.credited(amount)?;
        tracing::debug!(wallet = %self.id, %amount, balance = %self.balance, "funds added");
        Ok(())
    }

    /// Debit the wallet.
    pub fn remove_fund(&mut self, amount: Decimal) -> LedgerResult<()> {
        self.check_withdrawal(amount)?;
        self.balance -= amount;
        tracing::debug!(wallet = %self.id, %amount, balance = %self.balance, "funds removed");
        Ok(())
    }

    /// Check whether `remove_fund(amount)` would succeed, without changing anything.
    ///
    /// Callers that move value between several wallets use this to validate every
    /// debit before the first write.
    pub fn check_withdrawal(&self, amount: Decimal) -> LedgerResult<()> {
        ensure_non_negative(amount)?;
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(amount, self.balance));
        }
        Ok(())
    }

    /// Check whether `add_fund(amount)` would succeed, without changing anything.
    pub fn check_deposit(&self, amount: Decimal) -> LedgerResult<()> {
        self.credited(amount).map(|_| ())
    }

    /// Balance after crediting `amount`. A sum that only fits by rounding away
    /// part of `amount` counts as an overflow too.
    fn credited(&self, amount: Decimal) -> LedgerResult<Decimal> {
        ensure_non_negative(amount)?;
        self.balance
            .checked_add(amount)
            .filter(|sum| *sum - self.balance == amount)
            .ok_or_else(|| LedgerError::overflow("wallet credit"))
    }
}

impl Entity for Wallet {
    type Id = WalletId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
