//! Authentication error types.

use culina_core::error::CulinaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account is blocked")]
    AccountBlocked,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for CulinaError {
    fn from(err: AuthError) -> Self {
        match err {
            // Blocked accounts and token failures are indistinguishable
            // from bad credentials at the boundary.
            AuthError::InvalidCredentials
            | AuthError::AccountBlocked
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => CulinaError::InvalidCredentials,
            AuthError::Crypto(msg) => CulinaError::Crypto(msg),
        }
    }
}
