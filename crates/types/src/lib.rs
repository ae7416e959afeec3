// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Ledger Types
//!
//! This crate is the foundational library for the UTXO ledger, containing the
//! persisted record shapes, the fixed-point `Amount` type, error enums, and
//! configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `ledger-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a single canonical definition for shared
//! types like `Utxo`, `Transaction`, and `LedgerError`.

/// Ledger records: `Amount`, `Utxo`, `Transaction` and listing entries.
pub mod app;
/// Shared configuration structures (genesis parameters, storage location).
pub mod config;
/// A unified set of all error types used across the ledger.
pub mod error;
/// Constants for well-known state key prefixes.
pub mod keys;
