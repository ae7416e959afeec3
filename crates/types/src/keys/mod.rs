// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state key prefixes.

/// The state key prefix for live (unspent) outputs, followed by
/// `<transaction id>:<output index>`.
pub const UTXO_KEY_PREFIX: &[u8] = b"utxo::";
/// The state key prefix for transaction records, followed by the transaction id.
pub const TRANSACTION_KEY_PREFIX: &[u8] = b"tx::";
/// Separates the transaction id from the output index inside a UTXO key.
pub const UTXO_INDEX_SEPARATOR: u8 = b':';
