// Path: crates/cli/src/commands/config.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledger_types::config::LedgerConfig;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct ConfigCmdArgs {
    #[clap(subcommand)]
    pub command: ConfigSubCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubCommands {
    /// Write a ledger.toml populated with the defaults.
    New {
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

pub fn run(args: ConfigCmdArgs) -> Result<()> {
    match args.command {
        ConfigSubCommands::New { out_dir } => {
            fs::create_dir_all(&out_dir)?;
            let path = out_dir.join("ledger.toml");
            fs::write(&path, toml::to_string_pretty(&LedgerConfig::default())?)?;
            println!("Generated {}", path.display());
        }
    }
    Ok(())
}

/// Loads the ledger configuration from `path`, or the defaults when no file
/// is given. `db` overrides the configured storage path.
pub fn load(path: Option<&Path>, db: Option<PathBuf>) -> Result<LedgerConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str::<LedgerConfig>(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => LedgerConfig::default(),
    };
    if let Some(db) = db {
        config.storage.path = db;
    }
    Ok(config)
}
