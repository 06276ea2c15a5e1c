//! Financial event repository for database operations.

use pocketbook_core::StoreError;
use pocketbook_core::ledger::{EventType, FinancialEvent, FinancialEventStore, NewFinancialEvent};
use pocketbook_shared::{FinancialEventId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::store_error;
use crate::entities::{financial_events, sea_orm_active_enums::FinancialEventType};

/// Financial event repository. Events are append-only.
#[derive(Debug, Clone)]
pub struct FinancialEventRepository {
    db: DatabaseConnection,
}

impl FinancialEventRepository {
    /// Creates a new financial event repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one event row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn insert(&self, event: &NewFinancialEvent) -> Result<financial_events::Model, DbErr> {
        let row = financial_events::ActiveModel {
            id: NotSet,
            user_id: Set(event.user_id.into_inner()),
            value: Set(event.value),
            event_type: Set(to_db_event_type(event.event_type)),
        };

        row.insert(&self.db).await
    }

    /// Lists a user's events ordered by descending ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<financial_events::Model>, DbErr> {
        financial_events::Entity::find()
            .filter(financial_events::Column::UserId.eq(user_id.into_inner()))
            .order_by_desc(financial_events::Column::Id)
            .all(&self.db)
            .await
    }
}

impl FinancialEventStore for FinancialEventRepository {
    async fn create(&self, event: NewFinancialEvent) -> Result<FinancialEvent, StoreError> {
        let model = self.insert(&event).await.map_err(store_error)?;
        Ok(to_domain(model))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FinancialEvent>, StoreError> {
        let models = self.find_by_user(user_id).await.map_err(store_error)?;
        Ok(models.into_iter().map(to_domain).collect())
    }
}

/// Convert domain event type to database enum.
const fn to_db_event_type(event_type: EventType) -> FinancialEventType {
    match event_type {
        EventType::Income => FinancialEventType::Income,
        EventType::Outcome => FinancialEventType::Outcome,
    }
}

/// Convert database enum to domain event type.
const fn from_db_event_type(event_type: FinancialEventType) -> EventType {
    match event_type {
        FinancialEventType::Income => EventType::Income,
        FinancialEventType::Outcome => EventType::Outcome,
    }
}

/// Convert database model to domain model.
fn to_domain(model: financial_events::Model) -> FinancialEvent {
    FinancialEvent {
        id: FinancialEventId(model.id),
        user_id: UserId(model.user_id),
        value: model.value,
        event_type: from_db_event_type(model.event_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_round_trip() {
        for event_type in [EventType::Income, EventType::Outcome] {
            assert_eq!(from_db_event_type(to_db_event_type(event_type)), event_type);
        }
    }

    #[test]
    fn test_to_domain() {
        let model = financial_events::Model {
            id: 7,
            user_id: 3,
            value: rust_decimal_macros::dec!(40.0000),
            event_type: FinancialEventType::Outcome,
        };

        let event = to_domain(model);
        assert_eq!(event.id, FinancialEventId(7));
        assert_eq!(event.user_id, UserId(3));
        assert_eq!(event.value, rust_decimal_macros::dec!(40));
        assert_eq!(event.event_type, EventType::Outcome);
    }
}
