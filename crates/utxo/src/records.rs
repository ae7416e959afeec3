// Path: crates/utxo/src/records.rs
//! Typed access to ledger records over the raw store capability.

use crate::keys::{display_key, parse_transaction_key, parse_utxo_key, transaction_key, utxo_key};
use ledger_api::state::StateAccess;
use ledger_types::app::{Transaction, Utxo};
use ledger_types::error::LedgerError;

fn structural(key: &[u8], reason: impl ToString) -> LedgerError {
    LedgerError::StructuralDecode {
        key: display_key(key),
        reason: reason.to_string(),
    }
}

/// Decodes a UTXO record and checks it agrees with the key it was stored under.
pub fn decode_utxo(key: &[u8], value: &[u8]) -> Result<Utxo, LedgerError> {
    let (transaction_id, output_index) =
        parse_utxo_key(key).ok_or_else(|| structural(key, "not a well-formed UTXO key"))?;
    let utxo: Utxo = serde_json::from_slice(value).map_err(|e| structural(key, e))?;
    if utxo.transaction_id != transaction_id || utxo.output_index != output_index {
        return Err(structural(
            key,
            format!(
                "record names output {}:{}",
                utxo.transaction_id, utxo.output_index
            ),
        ));
    }
    Ok(utxo)
}

/// Decodes a transaction record and checks it agrees with its key.
pub fn decode_transaction(key: &[u8], value: &[u8]) -> Result<Transaction, LedgerError> {
    let id = parse_transaction_key(key)
        .ok_or_else(|| structural(key, "not a well-formed transaction key"))?;
    let transaction: Transaction =
        serde_json::from_slice(value).map_err(|e| structural(key, e))?;
    if transaction.id != id {
        return Err(structural(
            key,
            format!("record names transaction {}", transaction.id),
        ));
    }
    Ok(transaction)
}

/// Point lookup of a UTXO by its store key.
pub fn load_utxo<S: StateAccess + ?Sized>(
    state: &S,
    key: &[u8],
) -> Result<Option<Utxo>, LedgerError> {
    state
        .get(key)?
        .map(|bytes| decode_utxo(key, &bytes))
        .transpose()
}

/// Point lookup of a transaction by id.
pub fn load_transaction<S: StateAccess + ?Sized>(
    state: &S,
    transaction_id: &str,
) -> Result<Option<Transaction>, LedgerError> {
    let key = transaction_key(transaction_id);
    state
        .get(&key)?
        .map(|bytes| decode_transaction(&key, &bytes))
        .transpose()
}

/// Writes an output under the key derived from its `(transaction id, index)`.
pub fn store_utxo<S: StateAccess + ?Sized>(state: &mut S, utxo: &Utxo) -> Result<(), LedgerError> {
    let key = utxo_key(&utxo.transaction_id, utxo.output_index);
    let bytes = serde_json::to_vec(utxo).map_err(|e| structural(&key, e))?;
    state.insert(&key, &bytes)?;
    Ok(())
}

/// Writes a transaction record under its id.
pub fn store_transaction<S: StateAccess + ?Sized>(
    state: &mut S,
    transaction: &Transaction,
) -> Result<(), LedgerError> {
    let key = transaction_key(&transaction.id);
    let bytes = serde_json::to_vec(transaction).map_err(|e| structural(&key, e))?;
    state.insert(&key, &bytes)?;
    Ok(())
}

/// Removes a spent output from the live index.
pub fn spend_utxo<S: StateAccess + ?Sized>(state: &mut S, key: &[u8]) -> Result<(), LedgerError> {
    state.delete(key)?;
    Ok(())
}

/// Fails if a transaction record already exists under `transaction_id`.
pub fn ensure_unused_transaction_id<S: StateAccess + ?Sized>(
    state: &S,
    transaction_id: &str,
) -> Result<(), LedgerError> {
    if state.get(&transaction_key(transaction_id))?.is_some() {
        return Err(LedgerError::DuplicateTransaction(transaction_id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_state::MemoryStore;
    use ledger_types::app::{Amount, Direction};

    fn utxo(tx: &str, index: u32) -> Utxo {
        Utxo::new(tx, index, Amount::from_minor_units(150), "alice", Direction::Out)
    }

    #[test]
    fn stores_and_loads_by_derived_key() {
        let mut state = MemoryStore::new();
        let output = utxo("t1", 3);
        store_utxo(&mut state, &output).unwrap();

        assert_eq!(load_utxo(&state, b"utxo::t1:3").unwrap(), Some(output));
        assert_eq!(load_utxo(&state, b"utxo::t1:4").unwrap(), None);

        spend_utxo(&mut state, b"utxo::t1:3").unwrap();
        assert_eq!(load_utxo(&state, b"utxo::t1:3").unwrap(), None);
    }

    #[test]
    fn record_must_match_its_key() {
        let mut state = MemoryStore::new();
        let bytes = serde_json::to_vec(&utxo("t1", 1)).unwrap();
        state.insert(b"utxo::t1:2", &bytes).unwrap();

        let err = load_utxo(&state, b"utxo::t1:2").unwrap_err();
        assert_eq!(err.kind(), "StructuralDecodeError");
    }

    #[test]
    fn garbage_under_a_transaction_key_is_structural() {
        let mut state = MemoryStore::new();
        state.insert(b"tx::t9", b"{not json").unwrap();
        let err = load_transaction(&state, "t9").unwrap_err();
        assert!(matches!(err, LedgerError::StructuralDecode { ref key, .. } if key == "tx::t9"));
    }

    #[test]
    fn duplicate_transaction_ids_are_detected() {
        let mut state = MemoryStore::new();
        let tx = Transaction {
            id: "t1".into(),
            inputs: vec![],
            outputs: vec![utxo("t1", 1)],
        };
        ensure_unused_transaction_id(&state, "t1").unwrap();
        store_transaction(&mut state, &tx).unwrap();
        assert!(matches!(
            ensure_unused_transaction_id(&state, "t1"),
            Err(LedgerError::DuplicateTransaction(id)) if id == "t1"
        ));
        assert_eq!(load_transaction(&state, "t1").unwrap(), Some(tx));
    }
}
