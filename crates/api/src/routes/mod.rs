//! API route definitions.

use axum::{Router, middleware};
use pocketbook_core::auth::UserStore;
use pocketbook_core::ledger::FinancialEventStore;

use crate::{AppState, middleware::auth_middleware};

pub mod auth;
pub mod financial_events;
pub mod health;

/// Creates the API router: public routes plus the bearer-protected ledger.
pub fn api_routes<U, E>(state: &AppState<U, E>) -> Router<AppState<U, E>>
where
    U: UserStore + 'static,
    E: FinancialEventStore + 'static,
{
    let protected_routes = financial_events::routes::<U, E>().layer(middleware::from_fn_with_state(
        state.jwt_service.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(health::routes::<AppState<U, E>>())
        .merge(auth::routes::<U, E>())
        .merge(protected_routes)
}
