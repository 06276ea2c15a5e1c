//! Translation of domain errors into HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`. This is the only place an
//! error becomes a status code, and the only place server-side failures are
//! logged. Their detail never reaches the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pocketbook_core::auth::CredentialError;
use pocketbook_core::ledger::LedgerError;
use pocketbook_shared::{AppError, JwtError};
use serde_json::json;
use tracing::error;

/// Error returned from handlers, middleware, and extractors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Malformed or missing input (422).
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }

    /// Missing, malformed, or unverifiable credentials (401).
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::Unauthorized(message.into()))
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        Self(err.into())
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingError(detail) => Self(AppError::Internal(detail)),
            JwtError::DecodingError(_) | JwtError::Expired | JwtError::Invalid => {
                Self::unauthorized("Invalid or missing token")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            return (
                status,
                Json(json!({
                    "error": "internal_error",
                    "message": "An unexpected error occurred"
                })),
            )
                .into_response();
        }

        let message = match &self.0 {
            AppError::Validation(m) | AppError::Unauthorized(m) | AppError::Conflict(m) => m.clone(),
            AppError::Database(_) | AppError::Internal(_) => String::new(),
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": message
            })),
        )
            .into_response()
    }
}
