// Path: crates/utxo/src/genesis.rs
use crate::keys::validate_transaction_id;
use crate::model::UtxoModel;
use crate::records::{ensure_unused_transaction_id, store_transaction, store_utxo};
use ledger_api::ownership::SpendAuthority;
use ledger_api::state::StateAccess;
use ledger_types::app::{Direction, Transaction, Utxo, COINBASE_OUTPUT_INDEX};
use ledger_types::error::LedgerError;

/// Index of the single output a genesis transaction creates.
pub const GENESIS_OUTPUT_INDEX: u32 = 1;

impl<A: SpendAuthority> UtxoModel<A> {
    /// Seeds the ledger with one coinbase transaction.
    ///
    /// The coinbase input is recorded on the transaction only; it was never a
    /// live output, so nothing is deleted. The minted output goes to the
    /// configured beneficiary. Running this again with a fresh id mints again.
    pub fn initialize<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        transaction_id: &str,
    ) -> Result<Transaction, LedgerError> {
        validate_transaction_id(transaction_id)?;
        ensure_unused_transaction_id(&*state, transaction_id)?;

        let genesis = &self.genesis;
        let coinbase = Utxo::new(
            transaction_id,
            COINBASE_OUTPUT_INDEX,
            genesis.amount,
            genesis.coinbase_address.as_str(),
            Direction::In,
        );
        let minted = Utxo::new(
            transaction_id,
            GENESIS_OUTPUT_INDEX,
            genesis.amount,
            genesis.beneficiary.as_str(),
            Direction::Out,
        );
        store_utxo(state, &minted)?;

        let transaction = Transaction {
            id: transaction_id.to_string(),
            inputs: vec![coinbase],
            outputs: vec![minted],
        };
        store_transaction(state, &transaction)?;

        tracing::info!(
            target: "ledger",
            tx_id = transaction_id,
            beneficiary = %genesis.beneficiary,
            amount = %genesis.amount,
            "genesis transaction created"
        );
        Ok(transaction)
    }
}
