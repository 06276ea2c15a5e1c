//! Pocketbook API Server
//!
//! Main entry point for the Pocketbook ledger service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook_api::{AppState, create_router};
use pocketbook_db::migration::{Migrator, MigratorTrait};
use pocketbook_db::{FinancialEventRepository, UserRepository, connect_with};
use pocketbook_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocketbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let db = connect_with(&config.database)
        .await
        .context("failed to connect to database")?;
    info!("Connected to database");

    if config.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let jwt_service = JwtService::new(config.jwt.to_service_config());
    if let Some(ttl) = config.jwt.token_ttl_secs {
        info!(ttl_secs = ttl, "Tokens expire after the configured lifetime");
    }

    let state = AppState::new(
        jwt_service,
        UserRepository::new(db.clone()),
        FinancialEventRepository::new(db),
    );
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
