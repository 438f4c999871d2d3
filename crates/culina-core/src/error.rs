//! Error types for the CULINA system.
//!
//! Every user-facing failure carries a machine-distinguishable kind;
//! callers branch on the variant, never on a thrown object.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CulinaError {
    /// Username/email conflict — user-correctable (HTTP 409).
    #[error("{field} is already taken: {value}")]
    DuplicateIdentity { field: &'static str, value: String },

    /// Unknown record id (HTTP 404).
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Missing role-catalog entry or similar operator-correctable
    /// fault (HTTP 500).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Wrong old password on a password change — a recoverable
    /// conflict (HTTP 409), not an authentication failure.
    #[error("mismatched old password")]
    CredentialMismatch,

    /// Authentication failure (HTTP 401). Deliberately does not
    /// distinguish unknown user from wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("event publish failed: {0}")]
    Publish(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type CulinaResult<T> = Result<T, CulinaError>;
