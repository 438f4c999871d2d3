//! Authentication service — credential check and token issuance.

use culina_core::error::{CulinaError, CulinaResult};
use culina_core::models::user::UserStatus;
use culina_core::repository::UserRepository;
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Successful authentication result.
#[derive(Debug)]
pub struct AuthenticatedToken {
    /// Signed HS512 JWT.
    pub token: String,
    pub token_type: &'static str,
    /// Token lifetime in milliseconds.
    pub expires_in_ms: u64,
}

/// Authentication service.
///
/// Generic over the user repository so this layer has no dependency
/// on the database crate. Purely read-only: it never mutates
/// persisted state.
pub struct AuthService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Authenticate a username/password pair and issue a session
    /// token carrying the user's id and role authorities.
    ///
    /// Unknown user, wrong password, and blocked account all collapse
    /// into [`CulinaError::InvalidCredentials`] — the failure reveals
    /// nothing about which check failed.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> CulinaResult<AuthenticatedToken> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)
            .map_err(CulinaError::from)?;

        if !password::verify_password(password, &user.password_hash) {
            debug!(username, "authentication failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status != UserStatus::Active {
            debug!(username, "authentication failed: account blocked");
            return Err(AuthError::AccountBlocked.into());
        }

        let token =
            token::issue_token(user.id, &user.roles, &self.config).map_err(CulinaError::from)?;

        Ok(AuthenticatedToken {
            token,
            token_type: "Bearer",
            expires_in_ms: self.config.token_ttl_ms,
        })
    }
}
