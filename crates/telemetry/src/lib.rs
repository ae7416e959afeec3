// Path: crates/telemetry/src/lib.rs
#![forbid(unsafe_code)]
//! Process-wide `tracing` setup shared by the ledger binaries.

pub mod init;

pub use init::{init_tracing, init_tracing_with_filter, TelemetryError};
