use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use pocketledger_core::{
    truncate_to_minor_units, Currency, Entity, LedgerError, LedgerResult, PersonId, TransactionId,
};
use pocketledger_products::Product;
use pocketledger_wallets::Wallet;

use crate::record::{Division, Purchase, Transfer};

/// A person and the one wallet they own.
///
/// All value movement between people goes through here. Every operation validates
/// the whole movement (currencies, amount, sufficiency) before the first wallet is
/// written, so a rejected call leaves every wallet involved unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    name: String,
    wallet: Wallet,
}

impl Person {
    /// Create a person with an empty wallet in the given currency.
    pub fn new(name: impl Into<String>, code: &str) -> LedgerResult<Self> {
        Ok(Self::with_currency(name, code.parse()?))
    }

    pub fn with_currency(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            wallet: Wallet::with_currency(currency),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Replace the wallet wholesale and hand back the previous one.
    ///
    /// No currency reconciliation happens: the new wallet may hold any currency.
    pub fn set_wallet(&mut self, wallet: Wallet) -> Wallet {
        core::mem::replace(&mut self.wallet, wallet)
    }

    /// Move `amount` from this person's wallet to `recipient`'s.
    ///
    /// Fails with `CurrencyMismatch` if the wallets differ in currency, and with
    /// the wallets' own `InvalidAmount` / `InsufficientFunds` / `AmountOverflow`
    /// rejections.
    #[instrument(skip(self, recipient), fields(from = %self.id, to = %recipient.id), err)]
    pub fn transfer_fund(
        &mut self,
        amount: Decimal,
        recipient: &mut Person,
    ) -> LedgerResult<Transfer> {
        let currency = self.wallet.currency();
        ensure_currency(currency, &recipient.wallet)?;
        self.wallet.check_withdrawal(amount)?;
        recipient.wallet.check_deposit(amount)?;

        self.wallet.remove_fund(amount)?;
        recipient.wallet.add_fund(amount)?;

        info!(%currency, %amount, "funds transferred");
        Ok(Transfer {
            id: TransactionId::new(),
            from: self.id,
            to: recipient.id,
            currency,
            amount,
            occurred_at: Utc::now(),
        })
    }

    /// Buy one unit of `product`, paying in this person's wallet currency.
    ///
    /// The wallet is debited the product's unit price. The VAT rate is recorded on
    /// the returned [`Purchase`] but not added to the debit.
    #[instrument(skip(self, product), fields(buyer = %self.id, product = %product.id()), err)]
    pub fn buy_product(&mut self, product: &Product) -> LedgerResult<Purchase> {
        let currency = self.wallet.currency();
        let price = product
            .price_in(currency)
            .map_err(|_| LedgerError::CurrencyUnsupported {
                currency,
                product: product.name().to_string(),
            })?;

        self.wallet.remove_fund(price)?;

        info!(%currency, %price, "product bought");
        Ok(Purchase {
            id: TransactionId::new(),
            buyer: self.id,
            product: *product.id(),
            product_name: product.name().to_string(),
            currency,
            amount: price,
            vat_rate: product.vat_rate(),
            occurred_at: Utc::now(),
        })
    }

    /// Split this person's balance evenly between themself and `others`.
    ///
    /// With N = `others.len() + 1` participants, each of `others` is credited
    /// `balance / N` truncated to the currency's minor units. This person keeps one
    /// share plus whatever the truncation left over, so the sum of all balances is
    /// unchanged.
    #[instrument(skip_all, fields(source = %self.id, others = others.len()), err)]
    pub fn divide_wallet(&mut self, others: &mut [&mut Person]) -> LedgerResult<Division> {
        self.split_balance(others, true)
    }

    /// Hand this person's whole balance out evenly to `recipients`.
    ///
    /// Unlike [`Person::divide_wallet`] this person takes no share and keeps only
    /// the rounding remainder. Fails with `NoRecipients` on an empty list.
    #[instrument(skip_all, fields(source = %self.id, recipients = recipients.len()), err)]
    pub fn distribute_wallet(&mut self, recipients: &mut [&mut Person]) -> LedgerResult<Division> {
        if recipients.is_empty() {
            return Err(LedgerError::NoRecipients);
        }
        self.split_balance(recipients, false)
    }

    fn split_balance(
        &mut self,
        others: &mut [&mut Person],
        include_self: bool,
    ) -> LedgerResult<Division> {
        let currency = self.wallet.currency();
        for other in others.iter() {
            ensure_currency(currency, &other.wallet)?;
        }

        let participants = others.len() + usize::from(include_self);
        let total = self.wallet.balance();
        let share = truncate_to_minor_units(total / Decimal::from(participants), currency);
        let remainder = total - share * Decimal::from(participants);
        let outgoing = share * Decimal::from(others.len());

        for other in others.iter() {
            other.wallet.check_deposit(share)?;
        }

        self.wallet.remove_fund(outgoing)?;
        for other in others.iter_mut() {
            other.wallet.add_fund(share)?;
        }

        let mut recipients = Vec::with_capacity(participants);
        if include_self {
            recipients.push(self.id);
        }
        recipients.extend(others.iter().map(|p| p.id));

        info!(%currency, %total, %share, %remainder, participants, "wallet divided");
        Ok(Division {
            id: TransactionId::new(),
            source: self.id,
            currency,
            total,
            share,
            remainder,
            recipients,
            occurred_at: Utc::now(),
        })
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_currency(expected: Currency, wallet: &Wallet) -> LedgerResult<()> {
    if wallet.currency() != expected {
        return Err(LedgerError::currency_mismatch(expected, wallet.currency()));
    }
    Ok(())
}
