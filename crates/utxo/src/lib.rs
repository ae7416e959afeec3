// Path: crates/utxo/src/lib.rs
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

//! # UTXO Ledger
//!
//! The ledger state machine. Spendable value lives as discrete unspent
//! outputs keyed in an ordered store; a transfer selects outputs, deletes
//! them, writes the new outputs (including change) and records the
//! transaction. Every operation takes the store as an explicit argument, so
//! the same `UtxoModel` can serve any number of ledgers.

pub mod genesis;
pub mod keys;
pub mod model;
pub mod query;
pub mod records;
pub mod scanner;
pub mod selection;
pub mod transfer;

pub use keys::KeyKind;
pub use model::UtxoModel;
pub use selection::Selection;
