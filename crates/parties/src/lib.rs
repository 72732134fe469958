//! Parties domain module (people and the value they move).
//!
//! A [`Person`] owns exactly one wallet and is the entry point for every
//! multi-wallet operation: transfers, purchases and wallet divisions. Each
//! successful operation returns a record of what happened.

pub mod person;
pub mod record;

#[cfg(test)]
mod scenarios;

pub use person::Person;
pub use record::{Division, Purchase, Transfer};
