//! Authentication types for tokens and sign-up/sign-in payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Claims carried by an identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user.
    pub id: UserId,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp. Absent unless a token lifetime is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: UserId, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: user_id,
            iat: Utc::now().timestamp(),
            exp: expires_at.map(|at| at.timestamp()),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.id
    }
}

/// Sign-up request payload.
///
/// Fields are optional so that a missing field is reported as a validation
/// failure rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    /// Display name.
    pub name: Option<String>,
    /// Login email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Sign-in request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    /// Login email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Sign-in response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
}
