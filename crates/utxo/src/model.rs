// Path: crates/utxo/src/model.rs
use crate::selection::{select_coins, Selection};
use ledger_api::ownership::{AddressOwnership, SpendAuthority};
use ledger_api::state::StateAccess;
use ledger_types::app::{Amount, Utxo};
use ledger_types::config::GenesisConfig;
use ledger_types::error::LedgerError;

/// The UTXO ledger state machine.
///
/// The model owns no state of its own. Each operation is handed the store it
/// acts on, which keeps the model reusable across stores and lets a host run
/// an operation against an overlay and decide later whether to commit.
#[derive(Debug, Clone, Default)]
pub struct UtxoModel<A: SpendAuthority = AddressOwnership> {
    pub(crate) genesis: GenesisConfig,
    pub(crate) authority: A,
}

impl UtxoModel<AddressOwnership> {
    pub fn new(genesis: GenesisConfig) -> Self {
        Self {
            genesis,
            authority: AddressOwnership,
        }
    }
}

impl<A: SpendAuthority> UtxoModel<A> {
    /// Builds a model that consults a custom ownership policy.
    pub fn with_authority(genesis: GenesisConfig, authority: A) -> Self {
        Self { genesis, authority }
    }

    pub fn genesis(&self) -> &GenesisConfig {
        &self.genesis
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    pub fn is_spendable_by(&self, utxo: &Utxo, address: &str) -> bool {
        self.authority.may_spend(utxo, address)
    }

    /// Runs coin selection for `address` without mutating anything.
    pub fn select<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        address: &str,
        target: Amount,
    ) -> Result<Selection, LedgerError> {
        select_coins(state, &self.authority, address, target)
    }
}
