//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each one also implements the matching storage trait from `pocketbook-core`.

pub mod financial_event;
pub mod user;

pub use financial_event::FinancialEventRepository;
pub use user::UserRepository;

use pocketbook_core::StoreError;
use sea_orm::{DbErr, SqlErr};

/// Maps a `SeaORM` error onto the core storage error.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::UniqueViolation(detail),
        _ => StoreError::backend(err),
    }
}
