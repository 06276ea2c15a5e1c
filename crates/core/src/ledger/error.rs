//! Ledger error types.

use pocketbook_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// No value was supplied.
    #[error("value is required")]
    MissingValue,

    /// No type was supplied.
    #[error("type is required")]
    MissingType,

    /// Type is not INCOME or OUTCOME.
    #[error("unknown event type: {0}")]
    UnknownType(String),

    /// Value is below zero.
    #[error("value cannot be negative")]
    NegativeValue,

    /// Value has more integer digits than the ledger stores.
    #[error("value must be less than {max}")]
    ValueTooLarge {
        /// Exclusive upper bound.
        max: Decimal,
    },

    /// Value has more decimal places than the ledger stores.
    #[error("value cannot have more than {max_scale} decimal places")]
    TooManyDecimals {
        /// Largest accepted scale.
        max_scale: u32,
    },

    // ========== Aggregation Errors ==========
    /// The balance does not fit in a `Decimal`.
    #[error("balance overflowed")]
    BalanceOverflow,

    // ========== Storage Errors ==========
    /// Storage failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Storage(e) => e.into(),
            LedgerError::BalanceOverflow => Self::Internal(err.to_string()),
            other => Self::Validation(other.to_string()),
        }
    }
}
