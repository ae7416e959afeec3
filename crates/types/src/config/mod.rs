// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the ledger.
use crate::app::Amount;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level ledger configuration, usually loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Parameters of the genesis (coinbase) transaction.
    #[serde(default)]
    pub genesis: GenesisConfig,
    /// Where the ledger state lives.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Parameters of the genesis transaction that seeds the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// The value minted by the coinbase input.
    #[serde(default = "default_genesis_amount")]
    pub amount: Amount,
    /// The address that receives the minted value.
    #[serde(default = "default_beneficiary")]
    pub beneficiary: String,
    /// The placeholder owner recorded on the coinbase input.
    #[serde(default = "default_coinbase_address")]
    pub coinbase_address: String,
}

fn default_genesis_amount() -> Amount {
    Amount::from_minor_units(50 * 100)
}
fn default_beneficiary() -> String {
    "User A".to_string()
}
fn default_coinbase_address() -> String {
    "Coinbase".to_string()
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            amount: default_genesis_amount(),
            beneficiary: default_beneficiary(),
            coinbase_address: default_coinbase_address(),
        }
    }
}

/// Location of the persistent store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the redb database file.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("ledger.redb")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}
