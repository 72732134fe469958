//! Entity trait: identity that survives state changes.

/// A ledger object with a stable identity.
///
/// Wallets, products and persons are entities: two wallets holding the same
/// currency and balance are still different wallets.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
