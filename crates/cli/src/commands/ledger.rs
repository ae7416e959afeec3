// Path: crates/cli/src/commands/ledger.rs

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ledger_services::{InvocationReceipt, LedgerHost, LedgerMethod, LedgerService};
use ledger_state::RedbStore;
use ledger_types::config::LedgerConfig;

#[derive(Args, Debug, Clone, Default)]
pub struct TxIdArgs {
    /// Transaction identifier. A random 128-bit hex id is used when omitted.
    #[clap(long)]
    pub tx_id: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LedgerCommands {
    /// Seed the ledger with the configured genesis transaction.
    Init(TxIdArgs),
    /// Show one unspent output by its store key (e.g. `utxo::<tx>:1`).
    QueryUtxo { key: String },
    /// List the unspent outputs an address may spend.
    QueryUtxoByAddr { address: String },
    /// Show one transaction by id.
    QueryTransaction { id: String },
    /// List every unspent output.
    AllUtxos,
    /// List every transaction.
    AllTransactions,
    /// Move value between addresses.
    Transfer {
        from: String,
        to: String,
        amount: String,
        #[clap(flatten)]
        tx: TxIdArgs,
    },
}

impl LedgerCommands {
    /// The operation name, its string arguments and the transaction id to run it under.
    pub fn to_invocation(&self) -> (LedgerMethod, Vec<String>, String) {
        match self {
            LedgerCommands::Init(tx) => (LedgerMethod::Init, vec![], resolve_tx_id(tx)),
            LedgerCommands::QueryUtxo { key } => {
                (LedgerMethod::QueryUtxo, vec![key.clone()], String::new())
            }
            LedgerCommands::QueryUtxoByAddr { address } => (
                LedgerMethod::QueryUtxoByAddress,
                vec![address.clone()],
                String::new(),
            ),
            LedgerCommands::QueryTransaction { id } => {
                (LedgerMethod::QueryTransaction, vec![id.clone()], String::new())
            }
            LedgerCommands::AllUtxos => (LedgerMethod::GetAllUtxos, vec![], String::new()),
            LedgerCommands::AllTransactions => {
                (LedgerMethod::GetAllTransactions, vec![], String::new())
            }
            LedgerCommands::Transfer {
                from,
                to,
                amount,
                tx,
            } => (
                LedgerMethod::TransferUtxo,
                vec![from.clone(), to.clone(), amount.clone()],
                resolve_tx_id(tx),
            ),
        }
    }
}

fn resolve_tx_id(args: &TxIdArgs) -> String {
    args.tx_id
        .clone()
        .unwrap_or_else(|| hex::encode(rand::random::<[u8; 16]>()))
}

/// Opens the configured store, runs one command and returns its receipt.
pub fn run(config: &LedgerConfig, command: &LedgerCommands) -> Result<InvocationReceipt> {
    let store = RedbStore::open(&config.storage.path).with_context(|| {
        format!("failed to open ledger store {}", config.storage.path.display())
    })?;
    let mut host = LedgerHost::new(store, LedgerService::new(config.genesis.clone()));

    let (method, args, tx_id) = command.to_invocation();
    let receipt = host
        .invoke(&tx_id, method.name(), &args)
        .with_context(|| format!("{method} failed"))?;
    tracing::info!(
        target: "ledger",
        method = %method,
        tx_id = %receipt.transaction_id,
        reads = receipt.reads.len(),
        writes = receipt.writes.len(),
        "command finished"
    );
    Ok(receipt)
}

/// Renders a JSON payload for the terminal.
pub fn render(payload: &[u8], pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(String::from_utf8_lossy(payload).into_owned());
    }
    let value: serde_json::Value =
        serde_json::from_slice(payload).context("response is not valid JSON")?;
    Ok(serde_json::to_string_pretty(&value)?)
}
