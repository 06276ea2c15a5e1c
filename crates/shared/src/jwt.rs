//! Identity token generation and validation.
//!
//! Tokens are HS256-signed JWTs asserting `{ id }` for a user. They are
//! stateless: nothing is stored, and verification only needs the
//! process-wide secret. By default no `exp` claim is issued or required.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::Claims;
use crate::types::UserId;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Token lifetime in seconds. `None` issues tokens without expiry.
    pub expires_in_secs: Option<i64>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expires_in_secs: None,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed (malformed or bad signature).
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token is missing or empty.
    #[error("invalid token")]
    Invalid,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("secret", &"[hidden]")
            .field("expires_in_secs", &self.config.expires_in_secs)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        if config.expires_in_secs.is_some() {
            validation.set_required_spec_claims(&["exp"]);
            validation.validate_exp = true;
        } else {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed token asserting the given user's identity.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_token(&self, user_id: UserId) -> Result<String, JwtError> {
        let expires_at = self
            .config
            .expires_in_secs
            .map(|secs| Utc::now() + Duration::seconds(secs));
        let claims = Claims::new(user_id, expires_at);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Invalid` if the token is empty.
    /// Returns `JwtError::Expired` if a lifetime is configured and has passed.
    /// Returns `JwtError::DecodingError` if the token is malformed or its
    /// signature does not verify.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        if token.is_empty() {
            return Err(JwtError::Invalid);
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            expires_in_secs: None,
        })
    }

    #[test]
    fn test_generate_token() {
        let service = create_test_service();
        let token = service.generate_token(UserId(1)).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_validate_token() {
        let service = create_test_service();
        let token = service.generate_token(UserId(42)).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), UserId(42));
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_empty_token() {
        let service = create_test_service();
        assert!(matches!(service.validate_token(""), Err(JwtError::Invalid)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = JwtService::new(JwtConfig {
            secret: "first-secret".to_string(),
            expires_in_secs: None,
        });
        let verifier = JwtService::new(JwtConfig {
            secret: "second-secret".to_string(),
            expires_in_secs: None,
        });

        let token = issuer.generate_token(UserId(5)).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_token_with_lifetime_carries_exp() {
        let service = JwtService::new(JwtConfig {
            secret: "ttl-secret".to_string(),
            expires_in_secs: Some(3600),
        });
        let token = service.generate_token(UserId(8)).unwrap();
        let claims = service.validate_token(&token).unwrap();

        let exp = claims.exp.expect("exp should be set");
        assert!(exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(JwtConfig {
            secret: "ttl-secret".to_string(),
            expires_in_secs: Some(-3600),
        });
        let token = service.generate_token(UserId(8)).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::Expired)
        ));
    }

    #[test]
    fn test_ttl_service_rejects_token_without_exp() {
        let no_expiry = create_test_service();
        let strict = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            expires_in_secs: Some(60),
        });

        let token = no_expiry.generate_token(UserId(3)).unwrap();
        assert!(strict.validate_token(&token).is_err());
    }
}
