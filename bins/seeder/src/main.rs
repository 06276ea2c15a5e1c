//! Demo data seeder for Pocketbook development.
//!
//! Registers a demo account and records a handful of events for it, going
//! through the same services the API uses. Running it twice is a no-op.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use pocketbook_core::auth::{CredentialError, CredentialService};
use pocketbook_core::ledger::LedgerService;
use pocketbook_db::{FinancialEventRepository, UserRepository};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@pocketbook.local";
const DEMO_PASSWORD: &str = "demo-password";

const DEMO_EVENTS: [(Decimal, &str); 4] = [
    (dec!(2500), "INCOME"),
    (dec!(950), "OUTCOME"),
    (dec!(120.50), "OUTCOME"),
    (dec!(300), "INCOME"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = pocketbook_db::connect(&database_url)
        .await
        .context("failed to connect to database")?;

    let credentials = CredentialService::new(Arc::new(UserRepository::new(db.clone())));
    let ledger = LedgerService::new(Arc::new(FinancialEventRepository::new(db)));

    println!("Seeding demo user...");
    let user_id = match credentials
        .register(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)
        .await
    {
        Ok(id) => id,
        Err(CredentialError::DuplicateEmail) => {
            println!("  Demo user already exists, skipping");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to register demo user"),
    };

    println!("Seeding financial events...");
    for (value, event_type) in DEMO_EVENTS {
        ledger
            .record_event(user_id, Some(value), Some(event_type))
            .await
            .context("failed to record demo event")?;
    }

    let balance = ledger.compute_balance(user_id).await?;
    println!("Seeding complete! {DEMO_EMAIL} / {DEMO_PASSWORD}, balance {balance}");

    Ok(())
}
