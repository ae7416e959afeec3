// Path: crates/api/src/state/manager.rs
//! Defines the `StateManager` trait, which commits a finished invocation.

use crate::state::StateAccess;
use ledger_types::error::StateError;
use std::collections::BTreeSet;

/// A batch of key-value pairs to be inserted or updated in the state.
pub type StateInserts = Vec<(Vec<u8>, Vec<u8>)>;

/// A batch of keys to be deleted from the state.
pub type StateDeletes = Vec<Vec<u8>>;

/// Everything one invocation touched: the keys it read from the base state
/// and the writes it wants applied. Keys are in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateChangeSet {
    /// Keys fetched or scanned from the base state.
    pub reads: BTreeSet<Vec<u8>>,
    /// Keys to insert or overwrite.
    pub inserts: StateInserts,
    /// Keys to remove.
    pub deletes: StateDeletes,
}

impl StateChangeSet {
    /// The write set: every key inserted or deleted.
    pub fn write_keys(&self) -> BTreeSet<Vec<u8>> {
        self.inserts
            .iter()
            .map(|(key, _)| key.clone())
            .chain(self.deletes.iter().cloned())
            .collect()
    }

    /// Returns `true` if applying this change set would not mutate anything.
    pub fn is_read_only(&self) -> bool {
        self.inserts.is_empty() && self.deletes.is_empty()
    }
}

/// A store that can commit an invocation's writes as one unit.
pub trait StateManager: StateAccess {
    /// Applies all deletes and inserts atomically: either every write becomes
    /// visible or none does.
    fn apply_change_set(&mut self, changes: &StateChangeSet) -> Result<(), StateError>;
}

impl<T: StateManager + ?Sized> StateManager for Box<T> {
    fn apply_change_set(&mut self, changes: &StateChangeSet) -> Result<(), StateError> {
        (**self).apply_change_set(changes)
    }
}
