//! Value object marker: equality by value, not identity.

/// Marker for ledger values that have no identity of their own.
///
/// [`Currency`](crate::Currency) and [`ProductKind`](crate::ProductKind) are value
/// objects: any two `Currency::Usd` are interchangeable, which is what lets wallets
/// and price lists compare currencies with `==`.
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
