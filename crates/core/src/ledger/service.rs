//! Ledger service: record, list, and aggregate a user's financial events.

use std::future::Future;
use std::sync::Arc;

use pocketbook_shared::{FinancialEventId, UserId};
use rust_decimal::Decimal;

use super::balance::compute_balance;
use super::error::LedgerError;
use super::types::{FinancialEvent, NewFinancialEvent};
use super::validation::validate_event;
use crate::store::StoreError;

/// Repository trait for financial event persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait FinancialEventStore: Send + Sync {
    /// Inserts an event and returns it with its generated ID.
    fn create(
        &self,
        event: NewFinancialEvent,
    ) -> impl Future<Output = Result<FinancialEvent, StoreError>> + Send;

    /// Lists every event owned by a user, highest ID first.
    fn list_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<FinancialEvent>, StoreError>> + Send;
}

/// Ledger service for financial events.
pub struct LedgerService<R: FinancialEventStore> {
    repo: Arc<R>,
}

impl<R: FinancialEventStore> LedgerService<R> {
    /// Creates a new ledger service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validates and records an event for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a validation `LedgerError` for missing, unknown, negative,
    /// oversized, or over-precise input, and `LedgerError::Storage` if the insert fails.
    pub async fn record_event(
        &self,
        user_id: UserId,
        value: Option<Decimal>,
        event_type: Option<&str>,
    ) -> Result<FinancialEventId, LedgerError> {
        let (value, event_type) = validate_event(value, event_type)?;

        let event = self
            .repo
            .create(NewFinancialEvent {
                user_id,
                value,
                event_type,
            })
            .await?;

        Ok(event.id)
    }

    /// Lists all of a user's events, most recent (highest ID) first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the query fails.
    pub async fn list_events(&self, user_id: UserId) -> Result<Vec<FinancialEvent>, LedgerError> {
        let mut events = self.repo.list_by_user(user_id).await?;
        events.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(events)
    }

    /// Returns the user's balance over every event `list_events` would return.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the query fails and
    /// `LedgerError::BalanceOverflow` if the total does not fit in a `Decimal`.
    pub async fn compute_balance(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        let events = self.list_events(user_id).await?;
        compute_balance(&events)
    }
}
