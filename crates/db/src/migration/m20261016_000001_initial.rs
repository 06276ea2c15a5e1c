//! Initial database migration.
//!
//! Creates the users and financial_events tables. Email uniqueness and the
//! value/type rules are enforced here as well as in the services.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(FINANCIAL_EVENTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const USERS_SQL: &str = r"
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    CONSTRAINT users_email_key UNIQUE (email)
);
";

const FINANCIAL_EVENTS_SQL: &str = r"
CREATE TABLE financial_events (
    id SERIAL PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    value NUMERIC(19, 4) NOT NULL,
    type VARCHAR(16) NOT NULL,
    CONSTRAINT chk_financial_events_value CHECK (value >= 0),
    CONSTRAINT chk_financial_events_type CHECK (type IN ('INCOME', 'OUTCOME'))
);

-- Listing a user's events newest first
CREATE INDEX idx_financial_events_user ON financial_events(user_id, id DESC);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS financial_events CASCADE;
DROP TABLE IF EXISTS users CASCADE;
";
