// Path: crates/utxo/src/selection.rs
//! Greedy coin selection.

use crate::scanner::scan_utxos;
use ledger_api::ownership::SpendAuthority;
use ledger_api::state::StateAccess;
use ledger_types::app::{Amount, Utxo};
use ledger_types::error::LedgerError;

/// The outputs chosen to fund a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen outputs with their store keys, in scan order.
    pub chosen: Vec<(Vec<u8>, Utxo)>,
    /// Sum of the chosen amounts. Always at least the target.
    pub total: Amount,
}

impl Selection {
    /// What is left over once `target` has been paid.
    pub fn change(&self, target: Amount) -> Amount {
        self.total.checked_sub(target).unwrap_or(Amount::ZERO)
    }
}

/// Walks the live outputs in key order, taking every output `authority` lets
/// `address` spend, until the running total reaches `target`.
///
/// No further rows are pulled from the store once the target is met. If the
/// range is exhausted first, the error reports the total that was available.
pub fn select_coins<S, A>(
    state: &S,
    authority: &A,
    address: &str,
    target: Amount,
) -> Result<Selection, LedgerError>
where
    S: StateAccess + ?Sized,
    A: SpendAuthority + ?Sized,
{
    let mut spendable = scan_utxos(state, |utxo| authority.may_spend(utxo, address))?;
    let mut chosen = Vec::new();
    let mut total = Amount::ZERO;

    while total < target {
        let Some(row) = spendable.next() else {
            tracing::debug!(
                target: "ledger",
                address,
                requested = %target,
                available = %total,
                "coin selection exhausted spendable outputs"
            );
            return Err(LedgerError::InsufficientFunds {
                address: address.to_string(),
                requested: target.to_string(),
                available: total.to_string(),
            });
        };
        let (key, utxo) = row?;
        total = total
            .checked_add(utxo.amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        chosen.push((key, utxo));
    }

    tracing::debug!(
        target: "ledger",
        address,
        inputs = chosen.len(),
        total = %total,
        "selected outputs"
    );
    Ok(Selection { chosen, total })
}
