// Path: crates/api/src/state/overlay.rs

//! A copy-on-write state overlay that records an invocation's read and write sets.

use crate::state::{StateAccess, StateChangeSet, StateScanItem, StateScanIter};
use ledger_types::error::StateError;
use parking_lot::Mutex;
use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::iter::Peekable;
use std::sync::Arc;

/// An in-memory, copy-on-write overlay for any `StateAccess`.
///
/// Reads are first checked against the local `writes` cache. If a key is not
/// found, the read is passed through to the underlying `base` state and the
/// key is recorded in the read set. Scans merge the cached writes into the
/// base scan lazily, so a consumer that stops early only reads the keys it
/// actually pulled. All writes are captured locally and never reach `base`.
pub struct StateOverlay<'a> {
    base: &'a dyn StateAccess,
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>, // BTreeMap for deterministic commit order.
    reads: Mutex<BTreeSet<Vec<u8>>>,
}

impl<'a> StateOverlay<'a> {
    /// Creates a new, empty overlay on top of a base state accessor.
    pub fn new(base: &'a dyn StateAccess) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
            reads: Mutex::new(BTreeSet::new()),
        }
    }

    /// Number of keys written (inserted or deleted) so far.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Consumes the overlay and returns its read set and writes in a
    /// deterministic order.
    pub fn into_change_set(self) -> StateChangeSet {
        let mut inserts = Vec::new();
        let mut deletes = Vec::new();
        for (key, value_opt) in self.writes {
            match value_opt {
                Some(value) => inserts.push((key, value)),
                None => deletes.push(key),
            }
        }
        StateChangeSet {
            reads: self.reads.into_inner(),
            inserts,
            deletes,
        }
    }

    fn record_read(&self, key: &[u8]) {
        self.reads.lock().insert(key.to_vec());
    }
}

impl StateAccess for StateOverlay<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        if let Some(value_opt) = self.writes.get(key) {
            // Served from our own write set; the base is not touched.
            return Ok(value_opt.clone());
        }
        self.record_read(key);
        self.base.get(key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.writes.insert(key.to_vec(), None);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let base: StateScanIter<'_> = self.base.prefix_scan(prefix)?;
        let writes = self.writes.range(prefix.to_vec()..).peekable();
        Ok(Box::new(MergedScan {
            base: base.peekable(),
            writes,
            prefix: prefix.to_vec(),
            overlay: self,
        }))
    }
}

/// Merges a base scan with the overlay's pending writes, in key order.
struct MergedScan<'s, 'a> {
    base: Peekable<StateScanIter<'s>>,
    writes: Peekable<btree_map::Range<'s, Vec<u8>, Option<Vec<u8>>>>,
    prefix: Vec<u8>,
    overlay: &'s StateOverlay<'a>,
}

impl MergedScan<'_, '_> {
    fn next_write_key(&mut self) -> Option<Vec<u8>> {
        match self.writes.peek() {
            Some((key, _)) if key.starts_with(&self.prefix) => Some((*key).clone()),
            _ => None,
        }
    }

    fn take_base(&mut self) -> Option<StateScanItem> {
        let item = self.base.next()?;
        if let Ok((key, _)) = &item {
            self.overlay.record_read(key);
        }
        Some(item)
    }

    /// Pops the next pending write. `None` inside means it was a delete.
    fn take_write(&mut self) -> Option<Option<StateScanItem>> {
        let (key, value_opt) = self.writes.next()?;
        Some(
            value_opt
                .as_ref()
                .map(|value| Ok((Arc::from(key.as_slice()), Arc::from(value.as_slice())))),
        )
    }
}

impl Iterator for MergedScan<'_, '_> {
    type Item = StateScanItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let write_key = self.next_write_key();
            let base_key = match self.base.peek() {
                Some(Ok((key, _))) => Some(key.clone()),
                Some(Err(_)) => return self.base.next(),
                None => None,
            };

            let ordering = match (&base_key, &write_key) {
                (None, None) => return None,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(base), Some(write)) => base.as_ref().cmp(write.as_slice()),
            };

            match ordering {
                Ordering::Less => return self.take_base(),
                Ordering::Equal => {
                    // The base row is shadowed by our own write, but it was still read.
                    let _ = self.take_base();
                    if let Some(Some(item)) = self.take_write() {
                        return Some(item);
                    }
                }
                Ordering::Greater => {
                    if let Some(Some(item)) = self.take_write() {
                        return Some(item);
                    }
                }
            }
        }
    }
}
