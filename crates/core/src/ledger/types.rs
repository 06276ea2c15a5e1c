//! Ledger domain types.

use std::str::FromStr;

use pocketbook_shared::{FinancialEventId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Direction of a financial event.
///
/// The stored value is always non-negative; the type alone decides whether it
/// adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// Money in.
    Income,
    /// Money out.
    Outcome,
}

impl EventType {
    /// Returns the wire/storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Outcome => "OUTCOME",
        }
    }

    /// Returns the value's contribution to the balance.
    #[must_use]
    pub fn signed(self, value: Decimal) -> Decimal {
        match self {
            Self::Income => value,
            Self::Outcome => -value,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = LedgerError;

    /// Parses the exact upper-case names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(Self::Income),
            "OUTCOME" => Ok(Self::Outcome),
            other => Err(LedgerError::UnknownType(other.to_string())),
        }
    }
}

/// A recorded ledger entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialEvent {
    /// Database-generated ID; higher means created later.
    pub id: FinancialEventId,
    /// Owner.
    pub user_id: UserId,
    /// Non-negative magnitude.
    pub value: Decimal,
    /// Income or outcome.
    pub event_type: EventType,
}

impl FinancialEvent {
    /// Returns this event's contribution to the balance.
    #[must_use]
    pub fn signed_value(&self) -> Decimal {
        self.event_type.signed(self.value)
    }
}

/// A validated event about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFinancialEvent {
    /// Owner, taken from the verified token.
    pub user_id: UserId,
    /// Non-negative magnitude.
    pub value: Decimal,
    /// Income or outcome.
    pub event_type: EventType,
}
