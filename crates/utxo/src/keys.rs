// Path: crates/utxo/src/keys.rs
//! Store key derivation and classification.
//!
//! Every ledger key starts with a type tag, so classification never depends on
//! what a caller-supplied transaction identifier contains.

use ledger_types::error::LedgerError;
use ledger_types::keys::{TRANSACTION_KEY_PREFIX, UTXO_INDEX_SEPARATOR, UTXO_KEY_PREFIX};

/// The record shape a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A live unspent output.
    Utxo,
    /// A transaction record.
    Transaction,
}

/// `utxo::<transaction id>:<output index>`
pub fn utxo_key(transaction_id: &str, output_index: u32) -> Vec<u8> {
    let index = output_index.to_string();
    let mut key =
        Vec::with_capacity(UTXO_KEY_PREFIX.len() + transaction_id.len() + 1 + index.len());
    key.extend_from_slice(UTXO_KEY_PREFIX);
    key.extend_from_slice(transaction_id.as_bytes());
    key.push(UTXO_INDEX_SEPARATOR);
    key.extend_from_slice(index.as_bytes());
    key
}

/// `tx::<transaction id>`
pub fn transaction_key(transaction_id: &str) -> Vec<u8> {
    [TRANSACTION_KEY_PREFIX, transaction_id.as_bytes()].concat()
}

/// Classifies a key by its tag. Keys owned by anything other than the ledger
/// classify as `None`.
pub fn classify(key: &[u8]) -> Option<KeyKind> {
    if key.starts_with(UTXO_KEY_PREFIX) {
        Some(KeyKind::Utxo)
    } else if key.starts_with(TRANSACTION_KEY_PREFIX) {
        Some(KeyKind::Transaction)
    } else {
        None
    }
}

/// Splits a UTXO key into `(transaction id, output index)`.
///
/// The index is taken after the last separator, so identifiers containing
/// `:` still parse. Non-canonical indices (`01`, `+1`) are rejected so every
/// output has exactly one key.
pub fn parse_utxo_key(key: &[u8]) -> Option<(&str, u32)> {
    let body = std::str::from_utf8(key.strip_prefix(UTXO_KEY_PREFIX)?).ok()?;
    let (transaction_id, index) = body.rsplit_once(char::from(UTXO_INDEX_SEPARATOR))?;
    let output_index: u32 = index.parse().ok()?;
    if transaction_id.is_empty() || output_index.to_string() != index {
        return None;
    }
    Some((transaction_id, output_index))
}

/// Extracts the transaction id from a transaction key.
pub fn parse_transaction_key(key: &[u8]) -> Option<&str> {
    let id = std::str::from_utf8(key.strip_prefix(TRANSACTION_KEY_PREFIX)?).ok()?;
    (!id.is_empty()).then_some(id)
}

/// Renders a key for listings and error messages.
pub fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}

/// Rejects identifiers that cannot name a transaction.
pub fn validate_transaction_id(transaction_id: &str) -> Result<(), LedgerError> {
    if transaction_id.is_empty() {
        return Err(LedgerError::ArgumentFormat(
            "transaction id must not be empty".to_string(),
        ));
    }
    Ok(())
}
