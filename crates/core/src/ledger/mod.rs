//! Income/outcome ledger.
//!
//! This module implements the ledger functionality:
//! - Financial event domain types
//! - Input validation for new events
//! - Balance aggregation
//! - Error types for ledger operations
//! - Ledger service over a `FinancialEventStore`

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use balance::compute_balance;
pub use error::LedgerError;
pub use service::{FinancialEventStore, LedgerService};
pub use types::{EventType, FinancialEvent, NewFinancialEvent};
pub use validation::{MAX_SCALE, MAX_VALUE, validate_event};
