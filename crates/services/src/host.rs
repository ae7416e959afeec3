// Path: crates/services/src/host.rs
//! Runs ledger invocations in isolation and commits the ones that succeed.

use crate::ledger::LedgerService;
use ledger_api::ownership::{AddressOwnership, SpendAuthority};
use ledger_api::state::{StateManager, StateOverlay};
use ledger_types::error::LedgerError;
use std::collections::BTreeSet;

/// The outcome of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationReceipt {
    /// The operation that ran.
    pub method: String,
    /// The transaction identifier supplied with the call.
    pub transaction_id: String,
    /// The JSON response.
    pub payload: Vec<u8>,
    /// Keys the invocation fetched or scanned from committed state.
    pub reads: BTreeSet<Vec<u8>>,
    /// Keys the invocation inserted or deleted.
    pub writes: BTreeSet<Vec<u8>>,
}

/// Owns a committed store and drives invocations against it.
///
/// Each invocation gets a fresh [`StateOverlay`]. Its writes reach the store
/// through a single `apply_change_set` only if the operation succeeds; a
/// failed invocation is dropped with its overlay and leaves no trace.
pub struct LedgerHost<S: StateManager, A: SpendAuthority = AddressOwnership> {
    store: S,
    service: LedgerService<A>,
}

impl<S: StateManager, A: SpendAuthority> LedgerHost<S, A> {
    pub fn new(store: S, service: LedgerService<A>) -> Self {
        Self { store, service }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn service(&self) -> &LedgerService<A> {
        &self.service
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Runs `method` with `args` as transaction `transaction_id`.
    pub fn invoke(
        &mut self,
        transaction_id: &str,
        method: &str,
        args: &[String],
    ) -> Result<InvocationReceipt, LedgerError> {
        let mut overlay = StateOverlay::new(&self.store);
        let payload = match self
            .service
            .handle_call(&mut overlay, method, args, transaction_id)
        {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    target: "ledger",
                    tx_id = transaction_id,
                    method,
                    kind = e.kind(),
                    error = %e,
                    "invocation rejected; writes discarded"
                );
                return Err(e);
            }
        };

        let changes = overlay.into_change_set();
        if !changes.is_read_only() {
            self.store.apply_change_set(&changes)?;
        }
        tracing::debug!(
            target: "ledger",
            tx_id = transaction_id,
            method,
            reads = changes.reads.len(),
            inserts = changes.inserts.len(),
            deletes = changes.deletes.len(),
            "invocation committed"
        );

        Ok(InvocationReceipt {
            method: method.to_string(),
            transaction_id: transaction_id.to_string(),
            payload,
            writes: changes.write_keys(),
            reads: changes.reads,
        })
    }
}
