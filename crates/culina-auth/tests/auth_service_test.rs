//! Integration tests for the authentication service against
//! in-memory SurrealDB.

use chrono::Utc;
use culina_auth::config::AuthConfig;
use culina_auth::service::AuthService;
use culina_auth::{password, token};
use culina_core::error::CulinaError;
use culina_core::models::role::RoleName;
use culina_core::models::user::{User, UserCategory, UserStatus};
use culina_core::repository::UserRepository;
use culina_db::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "auth-service-test-secret".into(),
        token_ttl_ms: 900_000,
    }
}

/// Spin up an in-memory DB and persist one active user.
async fn setup(
    status: UserStatus,
) -> (SurrealUserRepository<surrealdb::engine::local::Db>, User) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    culina_db::run_migrations(&db).await.unwrap();

    let repo = SurrealUserRepository::new(db);
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: "alice".into(),
        email: "alice@example.com".into(),
        password_hash: password::hash_password("correct horse").unwrap(),
        full_name: "Alice".into(),
        status,
        category: Some(UserCategory::Customer),
        phone_number: None,
        tax_id: None,
        image_url: None,
        created_at: now,
        updated_at: now,
        roles: vec![RoleName::Customer],
    };
    let user = repo.save(&user).await.unwrap();
    (repo, user)
}

#[tokio::test]
async fn authenticate_issues_a_valid_token() {
    let (repo, user) = setup(UserStatus::Active).await;
    let config = test_config();
    let auth = AuthService::new(repo, config.clone());

    let issued = auth.authenticate("alice", "correct horse").await.unwrap();
    assert_eq!(issued.token_type, "Bearer");
    assert_eq!(issued.expires_in_ms, 900_000);
    assert!(token::validate_token(&issued.token, &config));
    assert_eq!(token::token_subject(&issued.token, &config).unwrap(), user.id);
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let (repo, _) = setup(UserStatus::Active).await;
    let auth = AuthService::new(repo, test_config());

    let err = auth.authenticate("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, CulinaError::InvalidCredentials));
}

#[tokio::test]
async fn unknown_user_is_indistinguishable_from_wrong_password() {
    let (repo, _) = setup(UserStatus::Active).await;
    let auth = AuthService::new(repo, test_config());

    let err = auth.authenticate("nobody", "correct horse").await.unwrap_err();
    assert!(matches!(err, CulinaError::InvalidCredentials));
}

#[tokio::test]
async fn blocked_account_cannot_authenticate() {
    let (repo, _) = setup(UserStatus::Blocked).await;
    let auth = AuthService::new(repo, test_config());

    let err = auth.authenticate("alice", "correct horse").await.unwrap_err();
    assert!(matches!(err, CulinaError::InvalidCredentials));
}
