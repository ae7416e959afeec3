// Path: crates/types/src/error/mod.rs
//! Core error types for the ledger.

use thiserror::Error;

/// Errors raised by a store backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Errors raised while parsing an `Amount` from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The text was empty.
    #[error("amount is empty")]
    Empty,
    /// The text is not a plain non-negative decimal.
    #[error("amount '{0}' is not a non-negative decimal")]
    Malformed(String),
    /// The text carries more fractional digits than an amount can hold.
    #[error("amount '{0}' has more than two fractional digits")]
    TooPrecise(String),
    /// The value does not fit.
    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Errors surfaced by ledger operations. Every variant maps onto one tagged
/// failure kind reported to the caller, see [`LedgerError::kind`].
#[derive(Error, Debug)]
pub enum LedgerError {
    /// An operation was called with the wrong number of arguments.
    #[error("Incorrect number of arguments for '{method}'. Expecting {expected}, got {got}")]
    ArgumentCount {
        /// The operation name.
        method: String,
        /// The expected arity.
        expected: usize,
        /// The number of arguments received.
        got: usize,
    },
    /// An argument could not be interpreted (bad amount, empty identifier, foreign key).
    #[error("Invalid argument: {0}")]
    ArgumentFormat(String),
    /// Coin selection could not cover the requested amount.
    #[error("Insufficient funds for '{address}': requested {requested}, available {available}")]
    InsufficientFunds {
        /// The spending address.
        address: String,
        /// The amount requested.
        requested: String,
        /// The total spendable amount found.
        available: String,
    },
    /// The underlying store failed.
    #[error("Store access error: {0}")]
    StoreAccess(#[from] StateError),
    /// A record did not decode as the shape its key promises.
    #[error("Malformed record under key '{key}': {reason}")]
    StructuralDecode {
        /// The offending store key.
        key: String,
        /// Why decoding failed.
        reason: String,
    },
    /// The operation name is not recognised.
    #[error("Invalid ledger function name '{0}'")]
    UnknownMethod(String),
    /// A transaction record with this identifier already exists.
    #[error("Transaction '{0}' already exists")]
    DuplicateTransaction(String),
    /// A running total exceeded the representable range.
    #[error("Amount arithmetic overflowed")]
    ArithmeticOverflow,
    /// A response payload could not be rendered as JSON.
    #[error("Failed to encode response: {0}")]
    ResponseEncoding(String),
}

impl LedgerError {
    /// The tagged failure kind reported to the host.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::ArgumentCount { .. } => "ArgumentCountError",
            LedgerError::ArgumentFormat(_) | LedgerError::ArithmeticOverflow => {
                "ArgumentFormatError"
            }
            LedgerError::InsufficientFunds { .. } => "InsufficientFundsError",
            LedgerError::StoreAccess(_) => "StoreAccessError",
            LedgerError::StructuralDecode { .. } | LedgerError::ResponseEncoding(_) => {
                "StructuralDecodeError"
            }
            LedgerError::UnknownMethod(_) => "UnknownMethodError",
            LedgerError::DuplicateTransaction(_) => "DuplicateTransactionError",
        }
    }
}

impl From<AmountError> for LedgerError {
    fn from(e: AmountError) -> Self {
        LedgerError::ArgumentFormat(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_tagged() {
        let err: LedgerError = StateError::Backend("disk".into()).into();
        assert_eq!(err.kind(), "StoreAccessError");
        let err: LedgerError = AmountError::Malformed("x".into()).into();
        assert_eq!(err.kind(), "ArgumentFormatError");
        assert_eq!(err.to_string(), "Invalid argument: amount 'x' is not a non-negative decimal");
    }
}
