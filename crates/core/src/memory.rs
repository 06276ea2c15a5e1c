//! In-memory store implementing every repository trait.
//!
//! Used by unit tests here and by the API crate's router tests. IDs are
//! assigned from per-table counters starting at 1, like a serial column.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pocketbook_shared::{FinancialEventId, UserId};
use tokio::sync::RwLock;

use crate::auth::{NewUser, User, UserStore};
use crate::ledger::{FinancialEvent, FinancialEventStore, NewFinancialEvent};
use crate::store::StoreError;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    events: Vec<FinancialEvent>,
    next_user_id: i32,
    next_event_id: i32,
}

/// Shared in-memory tables. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Backend`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("connection refused".to_string()));
        }
        Ok(())
    }
}

impl UserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        tables.next_user_id += 1;
        let created = User {
            id: UserId(tables.next_user_id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        tables.users.push(created.clone());
        Ok(created)
    }
}

impl FinancialEventStore for InMemoryStore {
    async fn create(&self, event: NewFinancialEvent) -> Result<FinancialEvent, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;

        tables.next_event_id += 1;
        let created = FinancialEvent {
            id: FinancialEventId(tables.next_event_id),
            user_id: event.user_id,
            value: event.value,
            event_type: event.event_type,
        };
        tables.events.push(created.clone());
        Ok(created)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FinancialEvent>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let store = InMemoryStore::new();
        let new_user = || NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        };

        let first = UserStore::create(&store, new_user()).await.unwrap();
        assert_eq!(first.id, UserId(1));

        let err = UserStore::create(&store, new_user()).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = InMemoryStore::new();
        store.set_unavailable(true);

        assert!(matches!(
            store.email_exists("a@x.com").await,
            Err(StoreError::Backend(_))
        ));

        store.set_unavailable(false);
        assert!(!store.email_exists("a@x.com").await.unwrap());
    }
}
