// Path: crates/state/src/flat/mod.rs

//! A flat, persistent store backed by a single redb table.

use ledger_api::state::{
    StateAccess, StateChangeSet, StateManager, StateScanItem, StateScanIter,
};
use ledger_types::error::StateError;
use redb::{Database, TableDefinition};
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

const STATE_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("ledger_state");

fn backend<E: std::fmt::Display>(e: E) -> StateError {
    StateError::Backend(e.to_string())
}

/// A persistent ordered store. Every `insert`/`delete` is its own redb write
/// transaction; `apply_change_set` groups a whole invocation into one.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Opens the database at `path`, creating it and its table if needed.
    pub fn open(path: &Path) -> Result<Self, StateError> {
        let db = Database::create(path).map_err(backend)?;

        // Ensure table exists
        let tx = db.begin_write().map_err(backend)?;
        {
            let _ = tx.open_table(STATE_TABLE).map_err(backend)?;
        }
        tx.commit().map_err(backend)?;

        tracing::debug!(target: "ledger_state", path = %path.display(), "opened redb store");
        Ok(Self { db: Arc::new(db) })
    }
}

impl StateAccess for RedbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(STATE_TABLE).map_err(backend)?;
        let result = table.get(key).map_err(backend)?;
        Ok(result.map(|v| v.value().to_vec()))
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(STATE_TABLE).map_err(backend)?;
            table.insert(key, value).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(STATE_TABLE).map_err(backend)?;
            table.remove(key).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(STATE_TABLE).map_err(backend)?;

        // The range owns its read snapshot, so rows are pulled one at a time
        // as the caller advances and a consumer that stops early reads no more.
        let rows = table.range(prefix..).map_err(backend)?;
        let prefix = prefix.to_vec();
        let scan = rows
            .map(|row| -> StateScanItem {
                let (k, v) = row.map_err(backend)?;
                Ok((Arc::from(k.value()), Arc::from(v.value())))
            })
            .take_while(move |item: &StateScanItem| {
                item.as_ref().map_or(true, |(k, _)| k.starts_with(&prefix))
            });
        Ok(Box::new(scan))
    }
}

impl StateManager for RedbStore {
    fn apply_change_set(&mut self, changes: &StateChangeSet) -> Result<(), StateError> {
        // A dropped, uncommitted redb transaction is rolled back, so an error
        // part-way through leaves the table untouched.
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(STATE_TABLE).map_err(backend)?;
            for key in &changes.deletes {
                table.remove(key.as_slice()).map_err(backend)?;
            }
            for (key, value) in &changes.inserts {
                table
                    .insert(key.as_slice(), value.as_slice())
                    .map_err(backend)?;
            }
        }
        write_txn.commit().map_err(backend)?;
        tracing::debug!(
            target: "ledger_state",
            inserts = changes.inserts.len(),
            deletes = changes.deletes.len(),
            "committed change set"
        );
        Ok(())
    }
}
