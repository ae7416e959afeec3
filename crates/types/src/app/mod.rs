// Path: crates/types/src/app/mod.rs
//! Core application-level data structures for the ledger.

mod amount;

pub use amount::Amount;

use serde::{Deserialize, Serialize};

/// The output index carried by a synthetic coinbase input, which has no real
/// predecessor output.
pub const COINBASE_OUTPUT_INDEX: u32 = u32::MAX;

/// Output indices are carried as canonical decimal strings (`"1"`, never
/// `"01"` or `1`), matching how they appear inside store keys.
mod decimal_index {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(index: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(index)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let text = String::deserialize(deserializer)?;
        let index: u32 = text.parse().map_err(de::Error::custom)?;
        if index.to_string() != text {
            return Err(de::Error::custom(format!("non-canonical output index '{text}'")));
        }
        Ok(index)
    }
}

/// Whether an output, as listed inside a transaction, was consumed or produced.
///
/// Live ledger entries are always `Out`; `In` only appears inside a
/// transaction's embedded input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Consumed by the transaction.
    In,
    /// Produced by the transaction.
    Out,
}

/// A transaction output. Keyed in the store if and only if it is unspent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    /// Identifier of the transaction that created this output.
    pub transaction_id: String,
    /// Position within the creating transaction's outputs, or
    /// [`COINBASE_OUTPUT_INDEX`] for a coinbase input.
    #[serde(with = "decimal_index")]
    pub output_index: u32,
    /// The value held.
    pub amount: Amount,
    /// Opaque owner identifier.
    pub address: String,
    /// Consumed (`in`) or produced (`out`).
    pub direction: Direction,
}

impl Utxo {
    /// Creates a new output record.
    pub fn new(
        transaction_id: impl Into<String>,
        output_index: u32,
        amount: Amount,
        address: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            output_index,
            amount,
            address: address.into(),
            direction,
        }
    }

    /// Returns a copy of this record tagged with a different direction.
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }

    /// Returns `true` if this is a synthetic coinbase input.
    pub fn is_coinbase(&self) -> bool {
        self.output_index == COINBASE_OUTPUT_INDEX
    }
}

/// An immutable record of one value-movement event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The caller-supplied transaction identifier.
    pub id: String,
    /// The outputs consumed, each tagged `in`.
    pub inputs: Vec<Utxo>,
    /// The outputs produced, each tagged `out`.
    pub outputs: Vec<Utxo>,
}

impl Transaction {
    /// Sum of all input amounts, or `None` on overflow.
    pub fn input_total(&self) -> Option<Amount> {
        sum_amounts(&self.inputs)
    }

    /// Sum of all output amounts, or `None` on overflow.
    pub fn output_total(&self) -> Option<Amount> {
        sum_amounts(&self.outputs)
    }
}

fn sum_amounts(utxos: &[Utxo]) -> Option<Amount> {
    utxos
        .iter()
        .try_fold(Amount::ZERO, |total, utxo| total.checked_add(utxo.amount))
}

/// One row of a listing response: a store key and the record stored under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LedgerEntry<T> {
    /// The store key, rendered as text.
    pub key: String,
    /// The decoded record.
    pub record: T,
}
