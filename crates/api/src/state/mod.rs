// Path: crates/api/src/state/mod.rs
//! Core traits for state access: the store capability the ledger reads and
//! writes through, the commit capability that applies a finished invocation,
//! and a copy-on-write overlay that captures read and write sets.

mod accessor;
mod manager;
mod overlay;

pub use accessor::*;
pub use manager::*;
pub use overlay::*;
