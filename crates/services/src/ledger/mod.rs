// Path: crates/services/src/ledger/mod.rs
//! Named-operation dispatch for the UTXO ledger.

use ledger_api::ownership::{AddressOwnership, SpendAuthority};
use ledger_api::state::StateAccess;
use ledger_types::app::Amount;
use ledger_types::config::GenesisConfig;
use ledger_types::error::LedgerError;
use ledger_utxo::UtxoModel;
use serde::Serialize;
use std::fmt;

/// The operations a caller may invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMethod {
    Init,
    QueryUtxo,
    QueryUtxoByAddress,
    QueryTransaction,
    GetAllUtxos,
    GetAllTransactions,
    TransferUtxo,
}

impl LedgerMethod {
    pub const ALL: [LedgerMethod; 7] = [
        LedgerMethod::Init,
        LedgerMethod::QueryUtxo,
        LedgerMethod::QueryUtxoByAddress,
        LedgerMethod::QueryTransaction,
        LedgerMethod::GetAllUtxos,
        LedgerMethod::GetAllTransactions,
        LedgerMethod::TransferUtxo,
    ];

    /// The wire name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            LedgerMethod::Init => "init",
            LedgerMethod::QueryUtxo => "queryUTXO",
            LedgerMethod::QueryUtxoByAddress => "queryUTXOByAddr",
            LedgerMethod::QueryTransaction => "queryTransaction",
            LedgerMethod::GetAllUtxos => "getAllUTXO",
            LedgerMethod::GetAllTransactions => "getAllTransaction",
            LedgerMethod::TransferUtxo => "transferUTXO",
        }
    }

    /// The exact number of string arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            LedgerMethod::Init | LedgerMethod::GetAllUtxos | LedgerMethod::GetAllTransactions => 0,
            LedgerMethod::QueryUtxo
            | LedgerMethod::QueryUtxoByAddress
            | LedgerMethod::QueryTransaction => 1,
            LedgerMethod::TransferUtxo => 3,
        }
    }

    /// Whether the operation writes to the store.
    pub fn is_mutating(self) -> bool {
        matches!(self, LedgerMethod::Init | LedgerMethod::TransferUtxo)
    }

    pub fn parse(name: &str) -> Result<Self, LedgerError> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| LedgerError::UnknownMethod(name.to_string()))
    }
}

impl fmt::Display for LedgerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn expect_args<'a, const N: usize>(
    method: LedgerMethod,
    args: &'a [String],
) -> Result<[&'a str; N], LedgerError> {
    let count_error = || LedgerError::ArgumentCount {
        method: method.name().to_string(),
        expected: method.arity(),
        got: args.len(),
    };
    if args.len() != method.arity() {
        return Err(count_error());
    }
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    refs.try_into().map_err(|_| count_error())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(value).map_err(|e| LedgerError::ResponseEncoding(e.to_string()))
}

/// Maps named operations with string arguments onto a [`UtxoModel`] and
/// renders every result as JSON.
#[derive(Debug, Clone, Default)]
pub struct LedgerService<A: SpendAuthority = AddressOwnership> {
    model: UtxoModel<A>,
}

impl LedgerService<AddressOwnership> {
    pub fn new(genesis: GenesisConfig) -> Self {
        Self {
            model: UtxoModel::new(genesis),
        }
    }
}

impl<A: SpendAuthority> LedgerService<A> {
    /// Wraps an already configured model.
    pub fn from_model(model: UtxoModel<A>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &UtxoModel<A> {
        &self.model
    }

    /// Runs one operation against `state`.
    ///
    /// `transaction_id` names the transaction created by `init` and
    /// `transferUTXO`; read-only operations ignore it. The returned bytes are
    /// the JSON response.
    pub fn handle_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        args: &[String],
        transaction_id: &str,
    ) -> Result<Vec<u8>, LedgerError> {
        let method = LedgerMethod::parse(method)?;
        match method {
            LedgerMethod::Init => {
                let [] = expect_args::<0>(method, args)?;
                to_json(&self.model.initialize(state, transaction_id)?)
            }
            LedgerMethod::QueryUtxo => {
                let [key] = expect_args::<1>(method, args)?;
                to_json(&self.model.get_utxo(&*state, key)?)
            }
            LedgerMethod::QueryUtxoByAddress => {
                let [address] = expect_args::<1>(method, args)?;
                to_json(&self.model.list_utxos_by_address(&*state, address)?)
            }
            LedgerMethod::QueryTransaction => {
                let [id] = expect_args::<1>(method, args)?;
                to_json(&self.model.get_transaction(&*state, id)?)
            }
            LedgerMethod::GetAllUtxos => {
                let [] = expect_args::<0>(method, args)?;
                to_json(&self.model.list_utxos(&*state)?)
            }
            LedgerMethod::GetAllTransactions => {
                let [] = expect_args::<0>(method, args)?;
                to_json(&self.model.list_transactions(&*state)?)
            }
            LedgerMethod::TransferUtxo => {
                let [from, to, amount] = expect_args::<3>(method, args)?;
                let amount: Amount = amount.parse()?;
                to_json(&self.model.transfer(state, transaction_id, from, to, amount)?)
            }
        }
    }
}
