//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for sign-up, sign-in, and the financial event ledger
//! - Bearer token authentication middleware
//! - Request extractors
//! - Translation of domain errors into HTTP responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;


use std::sync::Arc;

use axum::Router;
use pocketbook_core::auth::{CredentialService, UserStore};
use pocketbook_core::ledger::{FinancialEventStore, LedgerService};
use pocketbook_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
///
/// Generic over the storage backends so the router can run against the
/// database repositories or the in-memory store.
pub struct AppState<U: UserStore, E: FinancialEventStore> {
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Sign-up and sign-in.
    pub credentials: Arc<CredentialService<U>>,
    /// Financial event ledger.
    pub ledger: Arc<LedgerService<E>>,
}

impl<U: UserStore, E: FinancialEventStore> AppState<U, E> {
    /// Wires the services over the given stores.
    pub fn new(jwt_service: JwtService, users: U, events: E) -> Self {
        Self {
            jwt_service: Arc::new(jwt_service),
            credentials: Arc::new(CredentialService::new(Arc::new(users))),
            ledger: Arc::new(LedgerService::new(Arc::new(events))),
        }
    }
}

impl<U: UserStore, E: FinancialEventStore> Clone for AppState<U, E> {
    fn clone(&self) -> Self {
        Self {
            jwt_service: Arc::clone(&self.jwt_service),
            credentials: Arc::clone(&self.credentials),
            ledger: Arc::clone(&self.ledger),
        }
    }
}

/// Creates the main application router.
pub fn create_router<U, E>(state: AppState<U, E>) -> Router
where
    U: UserStore + 'static,
    E: FinancialEventStore + 'static,
{
    Router::new()
        .merge(routes::api_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
