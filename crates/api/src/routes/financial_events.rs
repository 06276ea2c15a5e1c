//! Financial event routes: record, list, and balance.
//!
//! All routes here sit behind the bearer-token middleware and only ever see
//! the authenticated user's own events.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use pocketbook_core::auth::UserStore;
use pocketbook_core::ledger::{EventType, FinancialEvent, FinancialEventStore};
use pocketbook_shared::types::amount::serialize_as_number;
use pocketbook_shared::{FinancialEventId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, extractors::JsonBody, middleware::AuthUser};

/// Creates the financial event router.
pub fn routes<U, E>() -> Router<AppState<U, E>>
where
    U: UserStore + 'static,
    E: FinancialEventStore + 'static,
{
    Router::new()
        .route(
            "/financial-events",
            get(list_events::<U, E>).post(record_event::<U, E>),
        )
        .route("/financial-events/sum", get(balance::<U, E>))
}

/// Request body for recording an event.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFinancialEventRequest {
    /// Non-negative magnitude.
    pub value: Option<Decimal>,
    /// `INCOME` or `OUTCOME`.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// A recorded event as returned by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEventResponse {
    /// Event ID.
    pub id: FinancialEventId,
    /// Owner.
    pub user_id: UserId,
    /// Magnitude.
    #[serde(serialize_with = "serialize_as_number")]
    pub value: Decimal,
    /// Direction.
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl From<FinancialEvent> for FinancialEventResponse {
    fn from(event: FinancialEvent) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            value: event.value,
            event_type: event.event_type,
        }
    }
}

/// Balance response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Total income minus total outcome.
    #[serde(serialize_with = "serialize_as_number")]
    pub sum: Decimal,
}

/// POST /financial-events - Record an event for the caller.
async fn record_event<U: UserStore, E: FinancialEventStore>(
    State(state): State<AppState<U, E>>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CreateFinancialEventRequest>,
) -> Result<StatusCode, ApiError> {
    let event_id = state
        .ledger
        .record_event(auth.user_id(), payload.value, payload.event_type.as_deref())
        .await?;

    info!(user_id = %auth.user_id(), event_id = %event_id, "Financial event recorded");
    Ok(StatusCode::CREATED)
}

/// GET /financial-events - List the caller's events, newest first.
async fn list_events<U: UserStore, E: FinancialEventStore>(
    State(state): State<AppState<U, E>>,
    auth: AuthUser,
) -> Result<Json<Vec<FinancialEventResponse>>, ApiError> {
    let events = state.ledger.list_events(auth.user_id()).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// GET /financial-events/sum - The caller's balance.
async fn balance<U: UserStore, E: FinancialEventStore>(
    State(state): State<AppState<U, E>>,
    auth: AuthUser,
) -> Result<Json<BalanceResponse>, ApiError> {
    let sum = state.ledger.compute_balance(auth.user_id()).await?;
    Ok(Json(BalanceResponse { sum }))
}
