//! Session token issuance and validation.
//!
//! Tokens are HS512 JWTs signed with a configured shared secret. The
//! claim set is part of the external interface: `sub` is the user id,
//! `roles` holds the comma-joined role authorities.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use culina_core::models::role::RoleName;

/// JWT claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (UUID string).
    pub sub: String,
    /// Comma-joined role authorities, e.g. `ROLE_CUSTOMER`.
    pub roles: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

/// Issue a signed token asserting `user_id` with the given roles,
/// valid from `issued_at` for the configured TTL.
pub fn issue_token_at(
    user_id: Uuid,
    roles: &[RoleName],
    issued_at: DateTime<Utc>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let ttl_ms = i64::try_from(config.token_ttl_ms)
        .map_err(|_| AuthError::Crypto("token TTL does not fit in i64 milliseconds".into()))?;
    let iat_ms = issued_at.timestamp_millis();
    // Claims carry whole seconds; a sub-second TTL floors to a token
    // that is already expired at issuance.
    let exp_ms = iat_ms + ttl_ms;
    let claims = TokenClaims {
        sub: user_id.to_string(),
        roles: roles
            .iter()
            .map(|r| r.authority())
            .collect::<Vec<_>>()
            .join(","),
        iat: iat_ms / 1000,
        exp: exp_ms / 1000,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    let header = Header::new(Algorithm::HS512);
    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Issue a token valid from the current instant.
pub fn issue_token(
    user_id: Uuid,
    roles: &[RoleName],
    config: &AuthConfig,
) -> Result<String, AuthError> {
    issue_token_at(user_id, roles, Utc::now(), config)
}

fn decode(token: &str, config: &AuthConfig, enforce_expiry: bool) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS512);
    validation.leeway = 0;
    validation.validate_exp = enforce_expiry;
    if enforce_expiry {
        validation.set_required_spec_claims(&["sub", "exp"]);
    } else {
        validation.set_required_spec_claims(&["sub"]);
    }

    jsonwebtoken::decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Validate a token: signature, structure, and expiry.
///
/// Malformed, expired, unsupported, and unsigned tokens all collapse
/// into `false`; the distinguishing reason is logged for operators
/// only. This function never panics and never returns an error.
pub fn validate_token(token: &str, config: &AuthConfig) -> bool {
    match decode(token, config, true) {
        Ok(_) => true,
        Err(AuthError::TokenExpired) => {
            debug!("token rejected: expired");
            false
        }
        Err(e) => {
            debug!(error = %e, "token rejected");
            false
        }
    }
}

/// Extract the subject (user id) from a token without enforcing
/// expiry. Callers that need expiry enforced must call
/// [`validate_token`] first.
pub fn token_subject(token: &str, config: &AuthConfig) -> Result<Uuid, AuthError> {
    let claims = decode(token, config, false)?;
    Uuid::parse_str(&claims.sub)
        .map_err(|e| AuthError::TokenInvalid(format!("subject is not a UUID: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-which-is-long-enough".into(),
            token_ttl_ms: 900_000,
        }
    }

    #[test]
    fn issued_token_validates() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, &[RoleName::Customer], &config).unwrap();
        assert!(validate_token(&token, &config));
        assert_eq!(token_subject(&token, &config).unwrap(), user_id);
    }

    #[test]
    fn roles_claim_is_comma_joined() {
        let config = test_config();
        let token = issue_token(
            Uuid::new_v4(),
            &[RoleName::Delivery, RoleName::Chef],
            &config,
        )
        .unwrap();
        let claims = decode(&token, &config, true).unwrap();
        assert_eq!(claims.roles, "ROLE_DELIVERY,ROLE_CHEF");
    }

    #[test]
    fn expired_token_is_invalid() {
        let config = test_config();
        let issued_at = Utc::now() - Duration::hours(1);
        let token =
            issue_token_at(Uuid::new_v4(), &[RoleName::Customer], issued_at, &config).unwrap();
        assert!(!validate_token(&token, &config));
    }

    #[test]
    fn subject_extraction_ignores_expiry() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let issued_at = Utc::now() - Duration::hours(1);
        let token = issue_token_at(user_id, &[RoleName::Customer], issued_at, &config).unwrap();
        assert_eq!(token_subject(&token, &config).unwrap(), user_id);
    }

    #[test]
    fn oversized_ttl_is_rejected() {
        let config = AuthConfig {
            token_ttl_ms: u64::MAX,
            ..test_config()
        };
        let result = issue_token(Uuid::new_v4(), &[RoleName::Customer], &config);
        assert!(matches!(result, Err(AuthError::Crypto(_))));
    }

    #[test]
    fn empty_token_is_invalid() {
        assert!(!validate_token("", &test_config()));
    }

    #[test]
    fn malformed_token_is_invalid() {
        assert!(!validate_token("not.a.jwt", &test_config()));
        assert!(!validate_token("garbage", &test_config()));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let config = test_config();
        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret!!!".into(),
            ..config.clone()
        };
        let token = issue_token(Uuid::new_v4(), &[RoleName::Admin], &other).unwrap();
        assert!(!validate_token(&token, &config));
    }
}
