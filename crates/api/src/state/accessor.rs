// Path: crates/api/src/state/accessor.rs
//! A dyn-safe trait for point and range access to an ordered key-value store.

use ledger_types::error::StateError;
use std::sync::Arc;

/// One key-value pair yielded by a scan.
pub type StateScanItem = Result<(Arc<[u8]>, Arc<[u8]>), StateError>;

/// A lazy, ascending-key-order iterator over scan results.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = StateScanItem> + 'a>;

/// The store capability the ledger is written against.
///
/// Implementations must yield scans in ascending byte order of the key.
pub trait StateAccess: Send + Sync {
    /// Gets a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;
    /// Inserts or overwrites a key-value pair.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;
    /// Deletes a key-value pair. Deleting an absent key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;
    /// Scans all key-value pairs whose key starts with `prefix`.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
    /// Scans the full keyspace.
    fn scan_all(&self) -> Result<StateScanIter<'_>, StateError> {
        self.prefix_scan(&[])
    }
}

impl<T: StateAccess + ?Sized> StateAccess for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get(key)
    }
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        (**self).insert(key, value)
    }
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        (**self).delete(key)
    }
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        (**self).prefix_scan(prefix)
    }
}
