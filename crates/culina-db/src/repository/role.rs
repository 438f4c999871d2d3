//! SurrealDB implementation of [`RoleRepository`].
//!
//! The role catalog is fixed reference data: four records, seeded
//! idempotently at startup and never mutated afterwards.

use culina_core::error::CulinaResult;
use culina_core::models::role::{Role, RoleName};
use culina_core::repository::RoleRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RoleRowWithId {
    record_id: String,
    name: String,
}

impl RoleRowWithId {
    fn try_into_role(self) -> Result<Role, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        let name = RoleName::parse(&self.name)
            .ok_or_else(|| DbError::Query(format!("unknown role name: {}", self.name)))?;
        Ok(Role { id, name })
    }
}

/// SurrealDB implementation of the Role repository.
#[derive(Clone)]
pub struct SurrealRoleRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRoleRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Seed the fixed role catalog. Idempotent: roles that already
    /// exist are left untouched.
    pub async fn seed_catalog(&self) -> CulinaResult<()> {
        for name in RoleName::CATALOG {
            if self.find_by_name(name).await?.is_some() {
                continue;
            }

            let id = Uuid::new_v4();
            self.db
                .query("CREATE type::record('role', $id) SET name = $name")
                .bind(("id", id.to_string()))
                .bind(("name", name.as_str()))
                .await
                .map_err(DbError::from)?
                .check()
                .map_err(|e| DbError::Query(e.to_string()))?;

            info!(role = name.as_str(), "role catalog entry seeded");
        }

        Ok(())
    }
}

impl<C: Connection> RoleRepository for SurrealRoleRepository<C> {
    async fn find_by_name(&self, name: RoleName) -> CulinaResult<Option<Role>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, name FROM role \
                 WHERE name = $name",
            )
            .bind(("name", name.as_str()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RoleRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_role()?)),
            None => Ok(None),
        }
    }
}
