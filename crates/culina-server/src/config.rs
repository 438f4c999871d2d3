//! Environment-driven server configuration.

use culina_auth::AuthConfig;
use culina_core::error::CulinaError;
use culina_db::DbConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub auth: AuthConfig,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// The signing secret and token TTL have no defaults: a missing
    /// or malformed value is a fatal startup condition. Database
    /// settings fall back to local defaults.
    pub fn from_env() -> Result<ServerConfig, CulinaError> {
        let jwt_secret = require("CULINA_JWT_SECRET")?;
        let ttl = require("CULINA_JWT_TTL_MS")?;
        let token_ttl_ms: u64 = ttl.parse().map_err(|_| {
            CulinaError::Configuration(format!("CULINA_JWT_TTL_MS is not a number: {ttl}"))
        })?;

        Ok(ServerConfig {
            auth: AuthConfig {
                jwt_secret,
                token_ttl_ms,
            },
            db: DbConfig::from_env(),
        })
    }
}

fn require(name: &str) -> Result<String, CulinaError> {
    std::env::var(name)
        .map_err(|_| CulinaError::Configuration(format!("required variable {name} is not set")))
}
