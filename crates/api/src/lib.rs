// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! # Ledger API
//!
//! Core traits and interfaces for the ledger. This crate defines the
//! boundary the ledger logic is written against: the store capability
//! (`StateAccess`), the commit capability (`StateManager`), the
//! read/write-set capturing `StateOverlay`, and the ownership capability
//! (`SpendAuthority`).

pub mod ownership;
pub mod state;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::ownership::{AddressOwnership, SpendAuthority};
    pub use crate::state::{StateAccess, StateChangeSet, StateManager, StateOverlay};
}
