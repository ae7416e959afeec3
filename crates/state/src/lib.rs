// Path: crates/state/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! Ordered key-value store backends implementing `StateAccess` and `StateManager`.
//!
//! - [`MemoryStore`]: a `BTreeMap`, used by tests and embedded hosts.
//! - [`RedbStore`]: a single redb table, used by the CLI for persistent ledgers.

pub mod flat;
pub mod memory;

pub use flat::RedbStore;
pub use memory::MemoryStore;
