//! Sign-up and sign-in routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use pocketbook_core::auth::{CredentialError, UserStore};
use pocketbook_core::ledger::FinancialEventStore;
use pocketbook_shared::auth::{SignInRequest, SignInResponse, SignUpRequest};
use tracing::info;

use crate::{AppState, error::ApiError, extractors::JsonBody};

/// Creates the auth router.
pub fn routes<U, E>() -> Router<AppState<U, E>>
where
    U: UserStore + 'static,
    E: FinancialEventStore + 'static,
{
    Router::new()
        .route("/sign-up", post(sign_up::<U, E>))
        .route("/sign-in", post(sign_in::<U, E>))
}

/// POST /sign-up - Register a new account.
async fn sign_up<U: UserStore, E: FinancialEventStore>(
    State(state): State<AppState<U, E>>,
    JsonBody(payload): JsonBody<SignUpRequest>,
) -> Result<StatusCode, ApiError> {
    let user_id = state
        .credentials
        .register(
            payload.name.as_deref().unwrap_or_default(),
            payload.email.as_deref().unwrap_or_default(),
            payload.password.as_deref().unwrap_or_default(),
        )
        .await?;

    info!(user_id = %user_id, "User registered");
    Ok(StatusCode::CREATED)
}

/// POST /sign-in - Exchange credentials for a bearer token.
async fn sign_in<U: UserStore, E: FinancialEventStore>(
    State(state): State<AppState<U, E>>,
    JsonBody(payload): JsonBody<SignInRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let user_id = match state
        .credentials
        .authenticate(
            payload.email.as_deref().unwrap_or_default(),
            payload.password.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(id) => id,
        Err(CredentialError::InvalidCredentials) => {
            info!("Failed sign-in attempt");
            return Err(CredentialError::InvalidCredentials.into());
        }
        Err(e) => return Err(e.into()),
    };

    let token = state.jwt_service.generate_token(user_id)?;
    Ok(Json(SignInResponse { token }))
}
