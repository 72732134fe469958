//! Wallets domain module.
//!
//! A wallet holds one currency and a non-negative balance. It is the leaf of the
//! ledger: persons own wallets and move value between them, but every balance
//! change goes through the validated operations defined here.

pub mod wallet;

pub use wallet::Wallet;
