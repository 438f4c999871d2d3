//! Authentication configuration.

/// Configuration for token issuance and validation.
///
/// Both fields are required at startup; the server refuses to boot
/// without them.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for the HS512 keyed MAC.
    pub jwt_secret: String,
    /// Token lifetime in milliseconds.
    pub token_ttl_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            // 15 minutes
            token_ttl_ms: 900_000,
        }
    }
}
