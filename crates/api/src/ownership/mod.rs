// Path: crates/api/src/ownership/mod.rs
//! The capability consulted whenever the ledger decides whether an address
//! may spend an output.

use ledger_types::app::{Direction, Utxo};

/// Decides whether `address` may spend `utxo`.
///
/// Coin selection and the by-address listing both go through this trait, so a
/// credential-checking implementation can be attached here without changing
/// the selection or transfer algorithms.
pub trait SpendAuthority: Send + Sync {
    /// Returns `true` if `address` may spend `utxo`.
    fn may_spend(&self, utxo: &Utxo, address: &str) -> bool;
}

/// Ownership by plain address equality, with no cryptographic proof.
///
/// An output is spendable by `address` when its owner field equals `address`
/// and it is a produced (`out`) record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressOwnership;

impl SpendAuthority for AddressOwnership {
    fn may_spend(&self, utxo: &Utxo, address: &str) -> bool {
        utxo.address == address && utxo.direction == Direction::Out
    }
}

impl<T: SpendAuthority + ?Sized> SpendAuthority for &T {
    fn may_spend(&self, utxo: &Utxo, address: &str) -> bool {
        (**self).may_spend(utxo, address)
    }
}
