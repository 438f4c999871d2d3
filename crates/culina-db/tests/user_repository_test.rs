//! Integration tests for the User repository using in-memory
//! SurrealDB.

use chrono::Utc;
use culina_core::error::CulinaError;
use culina_core::models::role::RoleName;
use culina_core::models::user::{User, UserCategory, UserStatus};
use culina_core::repository::{Pagination, SortDirection, SortKey, UserRepository};
use culina_db::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up an in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    culina_db::run_migrations(&db).await.unwrap();
    db
}

fn sample_user(username: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.into(),
        email: email.into(),
        password_hash: "$argon2id$stub".into(),
        full_name: "Test User".into(),
        status: UserStatus::Active,
        category: Some(UserCategory::Customer),
        phone_number: None,
        tax_id: None,
        image_url: None,
        created_at: now,
        updated_at: now,
        roles: vec![RoleName::Customer],
    }
}

#[tokio::test]
async fn save_and_find_by_id() {
    let repo = SurrealUserRepository::new(setup().await);

    let user = sample_user("alice", "alice@example.com");
    let saved = repo.save(&user).await.unwrap();
    assert_eq!(saved.id, user.id);
    assert_eq!(saved.username, "alice");
    assert_eq!(saved.status, UserStatus::Active);
    assert_eq!(saved.category, Some(UserCategory::Customer));
    assert_eq!(saved.roles, vec![RoleName::Customer]);

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "alice@example.com");
    assert_eq!(found.password_hash, "$argon2id$stub");
}

#[tokio::test]
async fn find_missing_user_is_none() {
    let repo = SurrealUserRepository::new(setup().await);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo.find_by_username("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn save_is_a_full_replace() {
    let repo = SurrealUserRepository::new(setup().await);

    let mut user = sample_user("bob", "bob@example.com");
    repo.save(&user).await.unwrap();

    user.full_name = "Robert".into();
    user.phone_number = Some("555-0100".into());
    user.status = UserStatus::Blocked;
    user.updated_at = Utc::now();
    repo.save(&user).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.full_name, "Robert");
    assert_eq!(found.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(found.status, UserStatus::Blocked);
}

#[tokio::test]
async fn existence_checks() {
    let repo = SurrealUserRepository::new(setup().await);
    repo.save(&sample_user("carol", "carol@example.com"))
        .await
        .unwrap();

    assert!(repo.exists_by_username("carol").await.unwrap());
    assert!(!repo.exists_by_username("dave").await.unwrap());
    assert!(repo.exists_by_email("carol@example.com").await.unwrap());
    assert!(!repo.exists_by_email("dave@example.com").await.unwrap());
}

#[tokio::test]
async fn find_by_username_returns_full_record() {
    let repo = SurrealUserRepository::new(setup().await);
    let user = sample_user("erin", "erin@example.com");
    repo.save(&user).await.unwrap();

    let found = repo.find_by_username("erin").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "erin@example.com");
}

#[tokio::test]
async fn duplicate_username_is_rejected_by_the_index() {
    let repo = SurrealUserRepository::new(setup().await);
    repo.save(&sample_user("frank", "frank@example.com"))
        .await
        .unwrap();

    // Different id and email, colliding username.
    let err = repo
        .save(&sample_user("frank", "frank2@example.com"))
        .await
        .unwrap_err();
    match err {
        CulinaError::DuplicateIdentity { field, value } => {
            assert_eq!(field, "username");
            assert_eq!(value, "frank");
        }
        other => panic!("expected DuplicateIdentity, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_the_index() {
    let repo = SurrealUserRepository::new(setup().await);
    repo.save(&sample_user("grace", "grace@example.com"))
        .await
        .unwrap();

    let err = repo
        .save(&sample_user("grace2", "grace@example.com"))
        .await
        .unwrap_err();
    match err {
        CulinaError::DuplicateIdentity { field, value } => {
            assert_eq!(field, "email");
            assert_eq!(value, "grace@example.com");
        }
        other => panic!("expected DuplicateIdentity, got {other:?}"),
    }
}

#[tokio::test]
async fn list_paginates_and_sorts() {
    let repo = SurrealUserRepository::new(setup().await);
    for name in ["iris", "hank", "judy"] {
        repo.save(&sample_user(name, &format!("{name}@example.com")))
            .await
            .unwrap();
    }

    let page = repo
        .list(Pagination {
            offset: 0,
            limit: 2,
            sort_key: SortKey::Username,
            direction: SortDirection::Asc,
        })
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].username, "hank");
    assert_eq!(page.items[1].username, "iris");

    let rest = repo
        .list(Pagination {
            offset: 2,
            limit: 2,
            sort_key: SortKey::Username,
            direction: SortDirection::Asc,
        })
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
    assert_eq!(rest.items[0].username, "judy");

    let desc = repo
        .list(Pagination {
            offset: 0,
            limit: 3,
            sort_key: SortKey::Username,
            direction: SortDirection::Desc,
        })
        .await
        .unwrap();
    assert_eq!(desc.items[0].username, "judy");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repo = SurrealUserRepository::new(setup().await);
    let user = sample_user("kate", "kate@example.com");
    repo.save(&user).await.unwrap();

    repo.delete(&user).await.unwrap();
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    assert!(!repo.exists_by_username("kate").await.unwrap());
}
