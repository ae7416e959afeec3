// Path: crates/utxo/src/transfer.rs
use crate::keys::validate_transaction_id;
use crate::model::UtxoModel;
use crate::records::{ensure_unused_transaction_id, spend_utxo, store_transaction, store_utxo};
use ledger_api::ownership::SpendAuthority;
use ledger_api::state::StateAccess;
use ledger_types::app::{Amount, Direction, Transaction, Utxo};
use ledger_types::error::LedgerError;

/// Index of the payment output in a transfer.
pub const PAYMENT_OUTPUT_INDEX: u32 = 1;
/// Index of the change output, present only when the inputs overshoot.
pub const CHANGE_OUTPUT_INDEX: u32 = 2;

fn require_address(role: &str, address: &str) -> Result<(), LedgerError> {
    if address.is_empty() {
        return Err(LedgerError::ArgumentFormat(format!(
            "{role} address must not be empty"
        )));
    }
    Ok(())
}

impl<A: SpendAuthority> UtxoModel<A> {
    /// Moves `amount` from `from` to `to` as transaction `transaction_id`.
    ///
    /// Every check, including coin selection, runs before the first write, so a
    /// failed transfer leaves `state` untouched. On success the selected
    /// outputs are deleted, the payment (and change, if any) outputs are
    /// written, and the transaction record is stored.
    pub fn transfer<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        transaction_id: &str,
        from: &str,
        to: &str,
        amount: Amount,
    ) -> Result<Transaction, LedgerError> {
        validate_transaction_id(transaction_id)?;
        require_address("sender", from)?;
        require_address("recipient", to)?;
        if amount.is_zero() {
            return Err(LedgerError::ArgumentFormat(
                "transfer amount must be greater than zero".to_string(),
            ));
        }
        ensure_unused_transaction_id(&*state, transaction_id)?;

        let selection = self.select(&*state, from, amount)?;
        let change = selection.change(amount);

        let mut inputs = Vec::with_capacity(selection.chosen.len());
        for (key, utxo) in &selection.chosen {
            spend_utxo(state, key)?;
            inputs.push(utxo.with_direction(Direction::In));
        }

        let mut outputs = vec![Utxo::new(
            transaction_id,
            PAYMENT_OUTPUT_INDEX,
            amount,
            to,
            Direction::Out,
        )];
        if !change.is_zero() {
            outputs.push(Utxo::new(
                transaction_id,
                CHANGE_OUTPUT_INDEX,
                change,
                from,
                Direction::Out,
            ));
        }
        for output in &outputs {
            store_utxo(state, output)?;
        }

        let transaction = Transaction {
            id: transaction_id.to_string(),
            inputs,
            outputs,
        };
        store_transaction(state, &transaction)?;

        tracing::info!(
            target: "ledger",
            tx_id = transaction_id,
            from,
            to,
            amount = %amount,
            change = %change,
            inputs = transaction.inputs.len(),
            "transfer committed to overlay"
        );
        Ok(transaction)
    }
}
