//! Unit tests for claims and token tampering.

#[cfg(test)]
mod tests {
    use crate::auth::Claims;
    use crate::jwt::{JwtConfig, JwtService};
    use crate::types::UserId;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "tamper-test-secret".to_string(),
            expires_in_secs: None,
        })
    }

    #[test]
    fn test_claims_new_sets_correct_fields() {
        let expires_at = Utc::now() + Duration::hours(1);
        let claims = Claims::new(UserId(11), Some(expires_at));

        assert_eq!(claims.id, UserId(11));
        assert!(claims.iat <= Utc::now().timestamp());
        assert_eq!(claims.exp, Some(expires_at.timestamp()));
    }

    #[test]
    fn test_claims_without_expiry_omit_exp() {
        let claims = Claims::new(UserId(2), None);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["id"], 2);
        assert!(json.get("exp").is_none());
    }

    #[test]
    fn test_claims_iat_is_current_time() {
        let before = Utc::now().timestamp();
        let claims = Claims::new(UserId(1), None);
        let after = Utc::now().timestamp();

        assert!(claims.iat >= before);
        assert!(claims.iat <= after);
    }

    const TOKEN_ALPHABET: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Any single-character change to a token makes it fail validation.
        #[test]
        fn prop_tampered_token_rejected(
            user in 1i32..1_000_000,
            position in any::<prop::sample::Index>(),
            replacement in prop::sample::select(TOKEN_ALPHABET),
        ) {
            let service = service();
            let token = service.generate_token(UserId(user)).unwrap();
            let mut bytes = token.into_bytes();
            let idx = position.index(bytes.len());
            prop_assume!(bytes[idx] != replacement);
            bytes[idx] = replacement;

            let tampered = String::from_utf8(bytes).unwrap();
            prop_assert!(service.validate_token(&tampered).is_err());
        }
    }
}
