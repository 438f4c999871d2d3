//! CULINA Auth — password hashing (Argon2id), JWT issuance and
//! validation (HS512), and the login flow.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, AuthenticatedToken};
pub use token::TokenClaims;
