// Path: crates/state/src/memory/mod.rs

//! An in-memory ordered store.

use ledger_api::state::{StateAccess, StateChangeSet, StateManager, StateScanIter};
use ledger_types::error::StateError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A `BTreeMap`-backed store. Scans are naturally in ascending key order and
/// `apply_change_set` cannot fail halfway, so commits are atomic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over every stored pair in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.data
            .iter()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }
}

impl StateAccess for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let bound = prefix.to_vec();
        let prefix = prefix.to_vec();
        let iter = self
            .data
            .range(bound..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| Ok((Arc::from(key.as_slice()), Arc::from(value.as_slice()))));
        Ok(Box::new(iter))
    }
}

impl StateManager for MemoryStore {
    fn apply_change_set(&mut self, changes: &StateChangeSet) -> Result<(), StateError> {
        for key in &changes.deletes {
            self.data.remove(key);
        }
        for (key, value) in &changes.inserts {
            self.data.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
