//! Products domain module.
//!
//! Products carry a kind (which fixes their VAT tier) and a price list keyed by
//! recognized currency. Pure domain logic: no IO, no storage.

pub mod price_list;
pub mod product;

pub use price_list::PriceList;
pub use product::Product;
