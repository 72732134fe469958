//! End-to-end ledger scenarios across persons, wallets and products.
//!
//! Verifies:
//! - value is conserved across chains of transfers, purchases and divisions
//! - rejected operations leave every entity untouched
//! - records serialize for downstream consumers

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pocketledger_core::{Currency, Entity, LedgerError, VatSchedule};
use pocketledger_products::Product;
use pocketledger_wallets::Wallet;

use crate::{Division, Person, Purchase, Transfer};

fn setup() {
    pocketledger_observability::init();
}

#[test]
fn replaced_wallet_is_the_one_operated_on() {
    setup();
    let mut sender = Person::new("Sender", "USD").unwrap();
    let mut wallet = Wallet::new("USD").unwrap();
    wallet.add_fund(dec!(100.0)).unwrap();
    sender.set_wallet(wallet);

    let mut receiver = Person::new("Receiver", "USD").unwrap();
    receiver.set_wallet(Wallet::new("USD").unwrap());

    sender.transfer_fund(dec!(50.0), &mut receiver).unwrap();

    assert_eq!(sender.wallet().balance(), dec!(50.0));
    assert_eq!(receiver.wallet().balance(), dec!(50.0));
}

#[test]
fn household_month() {
    setup();
    let mut parent = Person::new("Parent", "EUR").unwrap();
    let mut kid_a = Person::new("Kid A", "EUR").unwrap();
    let mut kid_b = Person::new("Kid B", "EUR").unwrap();
    parent.wallet_mut().add_fund(dec!(250.00)).unwrap();

    let groceries =
        Product::new("Groceries", [("EUR", dec!(80.50)), ("USD", dec!(90))], "food").unwrap();
    let purchase = parent.buy_product(&groceries).unwrap();
    assert_eq!(purchase.vat_rate, dec!(0.10));
    assert_eq!(parent.wallet().balance(), dec!(169.50));

    parent.transfer_fund(dec!(19.50), &mut kid_a).unwrap();
    assert_eq!(parent.wallet().balance(), dec!(150.00));

    let division = parent.divide_wallet(&mut [&mut kid_a, &mut kid_b]).unwrap();
    assert_eq!(division.share, dec!(50.00));

    assert_eq!(parent.wallet().balance(), dec!(50.00));
    assert_eq!(kid_a.wallet().balance(), dec!(69.50));
    assert_eq!(kid_b.wallet().balance(), dec!(50.00));

    let total: Decimal = [&parent, &kid_a, &kid_b]
        .iter()
        .map(|p| p.wallet().balance())
        .sum();
    assert_eq!(total + purchase.amount, dec!(250.00));
}

#[test]
fn switching_wallet_currency_changes_what_can_be_bought() {
    setup();
    let mut traveller = Person::new("Traveller", "USD").unwrap();
    traveller.wallet_mut().add_fund(dec!(20)).unwrap();
    let croissant = Product::new("Croissant", [("EUR", dec!(1.20))], "food").unwrap();

    let err = traveller.buy_product(&croissant).unwrap_err();
    assert!(matches!(err, LedgerError::CurrencyUnsupported { currency: Currency::Usd, .. }));

    traveller.wallet_mut().set_currency("EUR").unwrap();
    traveller.buy_product(&croissant).unwrap();
    assert_eq!(traveller.wallet().balance(), dec!(18.80));
}

#[test]
fn repricing_affects_later_purchases_only() {
    setup();
    let mut buyer = Person::new("Buyer", "USD").unwrap();
    buyer.wallet_mut().add_fund(dec!(100)).unwrap();
    let mut laptop = Product::new("Laptop", [("USD", dec!(40))], "tech").unwrap();

    let first = buyer.buy_product(&laptop).unwrap();
    laptop.set_prices([("USD", dec!(45))]).unwrap();
    let second = buyer.buy_product(&laptop).unwrap();

    assert_eq!(first.amount, dec!(40));
    assert_eq!(second.amount, dec!(45));
    assert_eq!(buyer.wallet().balance(), dec!(15));

    let err = buyer.buy_product(&laptop).unwrap_err();
    assert_eq!(err, LedgerError::insufficient_funds(dec!(45), dec!(15)));
}

#[test]
fn vat_inclusive_price_is_informational() {
    setup();
    let schedule = VatSchedule::default().with_standard(dec!(0.25));
    let phone = Product::new("Phone", [("USD", dec!(49.99))], "tech")
        .unwrap()
        .with_vat_schedule(schedule);
    let mut customer = Person::new("Customer", "USD").unwrap();
    customer.wallet_mut().add_fund(dec!(100.0)).unwrap();

    let purchase = customer.buy_product(&phone).unwrap();

    assert_eq!(phone.price_with_vat("USD").unwrap(), dec!(62.49));
    assert_eq!(purchase.vat_rate, dec!(0.25));
    assert_eq!(customer.wallet().balance(), dec!(50.01));
}

#[test]
fn failed_division_then_successful_transfer() {
    setup();
    let mut source = Person::new("Source", "USD").unwrap();
    source.wallet_mut().add_fund(dec!(60)).unwrap();
    let mut usd = Person::new("Usd", "USD").unwrap();
    let mut eur = Person::new("Eur", "EUR").unwrap();

    let err = source.distribute_wallet(&mut [&mut usd, &mut eur]).unwrap_err();
    assert_eq!(err, LedgerError::currency_mismatch(Currency::Usd, Currency::Eur));
    assert_eq!(source.wallet().balance(), dec!(60));

    source.transfer_fund(dec!(60), &mut usd).unwrap();
    assert_eq!(source.wallet().balance(), Decimal::ZERO);
    assert_eq!(usd.wallet().balance(), dec!(60));
}

#[test]
fn records_serialize_to_json() {
    setup();
    let mut a = Person::new("A", "USD").unwrap();
    let mut b = Person::new("B", "USD").unwrap();
    a.wallet_mut().add_fund(dec!(10)).unwrap();
    let mug = Product::new("Mug", [("USD", dec!(2.50))], "electronics").unwrap();

    let transfer = a.transfer_fund(dec!(3), &mut b).unwrap();
    let purchase = b.buy_product(&mug).unwrap();
    let division = a.divide_wallet(&mut [&mut b]).unwrap();

    let json = serde_json::to_value(&transfer).unwrap();
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["amount"], "3");
    assert_eq!(json["from"], a.id().to_string());

    let back: Transfer = serde_json::from_value(json).unwrap();
    assert_eq!(back, transfer);

    let back: Purchase = serde_json::from_str(&serde_json::to_string(&purchase).unwrap()).unwrap();
    assert_eq!(back, purchase);

    let back: Division = serde_json::from_str(&serde_json::to_string(&division).unwrap()).unwrap();
    assert_eq!(back.recipients, vec![*a.id(), *b.id()]);
}

#[test]
fn person_snapshot_serializes_wallet() {
    setup();
    let mut person = Person::new("Snapshot", "EUR").unwrap();
    person.wallet_mut().add_fund(dec!(12.30)).unwrap();

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["name"], "Snapshot");
    assert_eq!(json["wallet"]["currency"], "EUR");
    assert_eq!(json["wallet"]["balance"], "12.30");
}
