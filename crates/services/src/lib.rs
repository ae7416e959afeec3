// Path: crates/services/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Ledger Services
//!
//! The externally invocable surface of the ledger: [`ledger::LedgerService`]
//! maps named operations with string arguments onto the UTXO model, and
//! [`host::LedgerHost`] runs each invocation against an overlay and commits
//! only what a successful invocation wrote.

pub mod host;
pub mod ledger;

pub use host::{InvocationReceipt, LedgerHost};
pub use ledger::{LedgerMethod, LedgerService};
