// Path: crates/utxo/src/query.rs
//! Read-only views over the ledger. Results keep the store's key order.

use crate::keys::{classify, display_key, KeyKind};
use crate::model::UtxoModel;
use crate::records::{load_transaction, load_utxo};
use crate::scanner::{scan_transactions, scan_utxos, Row};
use ledger_api::ownership::SpendAuthority;
use ledger_api::state::StateAccess;
use ledger_types::app::{LedgerEntry, Transaction, Utxo};
use ledger_types::error::LedgerError;

fn into_entries<T, I>(rows: I) -> Result<Vec<LedgerEntry<T>>, LedgerError>
where
    I: Iterator<Item = Result<Row<T>, LedgerError>>,
{
    rows.map(|row| {
        row.map(|(key, record)| LedgerEntry {
            key: display_key(&key),
            record,
        })
    })
    .collect()
}

impl<A: SpendAuthority> UtxoModel<A> {
    /// Looks up one live output by its full store key (`utxo::<id>:<index>`).
    ///
    /// A key outside the UTXO range names no output and yields `None`; it is
    /// never read, so a transaction record can't be decoded as an output.
    pub fn get_utxo<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        key: &str,
    ) -> Result<Option<Utxo>, LedgerError> {
        if classify(key.as_bytes()) != Some(KeyKind::Utxo) {
            return Ok(None);
        }
        load_utxo(state, key.as_bytes())
    }

    pub fn get_transaction<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        transaction_id: &str,
    ) -> Result<Option<Transaction>, LedgerError> {
        load_transaction(state, transaction_id)
    }

    pub fn list_utxos<S: StateAccess + ?Sized>(
        &self,
        state: &S,
    ) -> Result<Vec<LedgerEntry<Utxo>>, LedgerError> {
        into_entries(scan_utxos(state, |_| true)?)
    }

    pub fn list_transactions<S: StateAccess + ?Sized>(
        &self,
        state: &S,
    ) -> Result<Vec<LedgerEntry<Transaction>>, LedgerError> {
        into_entries(scan_transactions(state)?)
    }

    /// Lists the outputs `address` may spend.
    pub fn list_utxos_by_address<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        address: &str,
    ) -> Result<Vec<LedgerEntry<Utxo>>, LedgerError> {
        into_entries(scan_utxos(state, |utxo| self.is_spendable_by(utxo, address))?)
    }
}
