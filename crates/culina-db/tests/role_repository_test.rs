//! Integration tests for the role catalog using in-memory SurrealDB.

use culina_core::models::role::RoleName;
use culina_core::repository::RoleRepository;
use culina_db::SurrealRoleRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    culina_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn unseeded_catalog_lookup_is_none() {
    let repo = SurrealRoleRepository::new(setup().await);
    assert!(
        repo.find_by_name(RoleName::Customer)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn seed_creates_every_catalog_entry() {
    let repo = SurrealRoleRepository::new(setup().await);
    repo.seed_catalog().await.unwrap();

    for name in RoleName::CATALOG {
        let role = repo.find_by_name(name).await.unwrap().unwrap();
        assert_eq!(role.name, name);
    }
}

#[tokio::test]
async fn seeding_twice_is_idempotent() {
    let repo = SurrealRoleRepository::new(setup().await);
    repo.seed_catalog().await.unwrap();
    let first = repo.find_by_name(RoleName::Chef).await.unwrap().unwrap();

    repo.seed_catalog().await.unwrap();
    let second = repo.find_by_name(RoleName::Chef).await.unwrap().unwrap();

    assert_eq!(first.id, second.id);
}
