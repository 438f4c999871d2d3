//! CULINA Server — application entry point.

mod config;

use culina_auth::AuthService;
use culina_db::{DbManager, SurrealRoleRepository, SurrealUserRepository};
use culina_users::{TracingSink, UserService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("culina=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting CULINA identity service...");

    let config = match config::ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "configuration is invalid");
            std::process::exit(1);
        }
    };

    let db = match DbManager::connect(&config.db).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "database connection failed");
            std::process::exit(1);
        }
    };

    if let Err(e) = culina_db::run_migrations(db.client()).await {
        tracing::error!(error = %e, "migrations failed");
        std::process::exit(1);
    }

    let roles = SurrealRoleRepository::new(db.client().clone());
    if let Err(e) = roles.seed_catalog().await {
        tracing::error!(error = %e, "role catalog seeding failed");
        std::process::exit(1);
    }

    let users = SurrealUserRepository::new(db.client().clone());
    // Held until shutdown; the transport layer will borrow them once
    // it lands.
    let _registry = UserService::new(users.clone(), roles, TracingSink);
    let _auth = AuthService::new(users, config.auth.clone());

    tracing::info!("CULINA identity service ready");

    // TODO: mount the HTTP transport onto the registry and auth
    // services once the routing layer lands.

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }

    tracing::info!("CULINA identity service stopped.");
}
