// Path: crates/utxo/src/scanner.rs
//! Lazy, typed scans over the tagged key ranges.

use crate::records::{decode_transaction, decode_utxo};
use ledger_api::state::StateAccess;
use ledger_types::app::{Transaction, Utxo};
use ledger_types::error::LedgerError;
use ledger_types::keys::{TRANSACTION_KEY_PREFIX, UTXO_KEY_PREFIX};

/// A decoded row: the raw key and its record.
pub type Row<T> = (Vec<u8>, T);

/// Streams every live UTXO accepted by `filter`, in key order.
///
/// Rows are decoded one at a time as the caller pulls them, so a consumer that
/// stops early never touches the rest of the range. A row that fails to decode
/// is yielded as an error; it is never silently skipped.
pub fn scan_utxos<'s, S, F>(
    state: &'s S,
    mut filter: F,
) -> Result<impl Iterator<Item = Result<Row<Utxo>, LedgerError>> + 's, LedgerError>
where
    S: StateAccess + ?Sized,
    F: FnMut(&Utxo) -> bool + 's,
{
    let rows = state.prefix_scan(UTXO_KEY_PREFIX)?;
    Ok(rows.filter_map(move |item| {
        let decoded = item
            .map_err(LedgerError::from)
            .and_then(|(key, value)| Ok((key.to_vec(), decode_utxo(&key, &value)?)));
        match decoded {
            Ok((key, utxo)) => filter(&utxo).then_some(Ok((key, utxo))),
            Err(e) => Some(Err(e)),
        }
    }))
}

/// Streams every transaction record, in key order.
pub fn scan_transactions<'s, S>(
    state: &'s S,
) -> Result<impl Iterator<Item = Result<Row<Transaction>, LedgerError>> + 's, LedgerError>
where
    S: StateAccess + ?Sized,
{
    let rows = state.prefix_scan(TRANSACTION_KEY_PREFIX)?;
    Ok(rows.map(|item| -> Result<Row<Transaction>, LedgerError> {
        let (key, value) = item?;
        Ok((key.to_vec(), decode_transaction(&key, &value)?))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UtxoModel;
    use crate::records::{store_transaction, store_utxo};
    use ledger_api::state::StateScanIter;
    use ledger_state::MemoryStore;
    use ledger_types::app::{Amount, Direction};
    use ledger_types::config::GenesisConfig;
    use ledger_types::error::StateError;

    fn seeded() -> MemoryStore {
        let mut state = MemoryStore::new();
        for (tx, index, owner) in [("b", 1, "alice"), ("a", 2, "bob"), ("a", 1, "alice")] {
            let utxo = Utxo::new(tx, index, Amount::from_minor_units(100), owner, Direction::Out);
            store_utxo(&mut state, &utxo).unwrap();
        }
        store_transaction(
            &mut state,
            &Transaction {
                id: "a".into(),
                inputs: vec![],
                outputs: vec![],
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn scans_are_scoped_to_their_tag_and_ordered() {
        let state = seeded();
        let keys: Vec<Vec<u8>> = scan_utxos(&state, |_| true)
            .unwrap()
            .map(|row| row.unwrap().0)
            .collect();
        assert_eq!(
            keys,
            vec![b"utxo::a:1".to_vec(), b"utxo::a:2".to_vec(), b"utxo::b:1".to_vec()]
        );

        let txs: Vec<_> = scan_transactions(&state).unwrap().collect::<Result<_, _>>().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].1.id, "a");
    }

    #[test]
    fn filter_applies_to_decoded_records() {
        let state = seeded();
        let owners: Vec<String> = scan_utxos(&state, |u| u.address == "alice")
            .unwrap()
            .map(|row| row.unwrap().1.transaction_id)
            .collect();
        assert_eq!(owners, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn corrupt_rows_surface_as_errors() {
        let mut state = seeded();
        state.insert(b"utxo::a:3", b"[]").unwrap();
        let results: Vec<_> = scan_utxos(&state, |_| false).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            &results[0],
            Err(LedgerError::StructuralDecode { key, .. }) if key == "utxo::a:3"
        ));
    }

    /// Point reads succeed and find nothing; every scan fails.
    struct FailingScans;

    impl StateAccess for FailingScans {
        fn get(&self, _: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
            Ok(None)
        }
        fn insert(&mut self, _: &[u8], _: &[u8]) -> Result<(), StateError> {
            Ok(())
        }
        fn delete(&mut self, _: &[u8]) -> Result<(), StateError> {
            Ok(())
        }
        fn prefix_scan(&self, _: &[u8]) -> Result<StateScanIter<'_>, StateError> {
            Ok(Box::new(std::iter::once(Err(StateError::Backend("disk".into())))))
        }
    }

    #[test]
    fn store_failures_propagate_to_ledger_operations() {
        let results: Vec<_> = scan_utxos(&FailingScans, |_| true).unwrap().collect();
        assert!(matches!(
            results.as_slice(),
            [Err(LedgerError::StoreAccess(StateError::Backend(msg)))] if msg == "disk"
        ));

        let model = UtxoModel::new(GenesisConfig::default());
        let mut state = FailingScans;
        assert_eq!(model.list_utxos(&state).unwrap_err().kind(), "StoreAccessError");
        assert_eq!(model.list_transactions(&state).unwrap_err().kind(), "StoreAccessError");
        assert_eq!(
            model.list_utxos_by_address(&state, "User A").unwrap_err().kind(),
            "StoreAccessError"
        );
        let err = model
            .transfer(&mut state, "tx1", "User A", "User B", Amount::from_minor_units(100))
            .unwrap_err();
        assert_eq!(err.kind(), "StoreAccessError");
    }
}
