// Path: crates/cli/src/main.rs
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

//! # Ledger CLI
//!
//! Drives a single UTXO ledger stored in a redb file: seed it, move value
//! between addresses and inspect outputs and transactions.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::config::ConfigCmdArgs;
use commands::ledger::LedgerCommands;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "ledger",
    version,
    about = "A minimal UTXO ledger over an ordered key-value store."
)]
struct Cli {
    /// Path to a ledger.toml. Defaults apply when omitted.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the redb database, overriding the configured one.
    #[clap(long, global = true)]
    db: Option<PathBuf>,

    /// Pretty-print JSON responses.
    #[clap(long, global = true)]
    pretty: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate configuration files.
    Config(ConfigCmdArgs),

    #[clap(flatten)]
    Ledger(LedgerCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ledger_telemetry::init_tracing()?;

    match cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Ledger(command) => {
            let config = commands::config::load(cli.config.as_deref(), cli.db)?;
            let receipt = commands::ledger::run(&config, &command)?;
            println!("{}", commands::ledger::render(&receipt.payload, cli.pretty)?);
            Ok(())
        }
    }
}
