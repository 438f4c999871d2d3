//! SurrealDB implementation of [`UserRepository`].
//!
//! `save` is an UPSERT: insert or full replace of the record keyed by
//! the user's UUID. The unique indexes on `username` and `email` are
//! the final authority for the uniqueness invariant: a violation is
//! translated into `CulinaError::DuplicateIdentity` naming the
//! conflicting field, so concurrent writers racing past the
//! application-level existence checks still converge on the same
//! outcome.

use chrono::{DateTime, Utc};
use culina_core::error::{CulinaError, CulinaResult};
use culina_core::models::role::RoleName;
use culina_core::models::user::{User, UserCategory, UserStatus};
use culina_core::repository::{
    PaginatedResult, Pagination, SortDirection, SortKey, UserRepository,
};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::{DbError, duplicate_user_field};

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    username: String,
    email: String,
    password_hash: String,
    full_name: String,
    status: String,
    category: Option<String>,
    phone_number: Option<String>,
    tax_id: Option<String>,
    image_url: Option<String>,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    username: String,
    email: String,
    password_hash: String,
    full_name: String,
    status: String,
    category: Option<String>,
    phone_number: Option<String>,
    tax_id: Option<String>,
    image_url: Option<String>,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

fn parse_status(s: &str) -> Result<UserStatus, DbError> {
    match s {
        "Active" => Ok(UserStatus::Active),
        "Blocked" => Ok(UserStatus::Blocked),
        other => Err(DbError::Query(format!("unknown user status: {other}"))),
    }
}

fn status_to_string(s: UserStatus) -> &'static str {
    match s {
        UserStatus::Active => "Active",
        UserStatus::Blocked => "Blocked",
    }
}

fn parse_roles(names: &[String]) -> Result<Vec<RoleName>, DbError> {
    names
        .iter()
        .map(|n| {
            RoleName::parse(n).ok_or_else(|| DbError::Query(format!("unknown role name: {n}")))
        })
        .collect()
}

impl UserRow {
    fn into_user(self, id: Uuid) -> Result<User, DbError> {
        let category = match self.category.as_deref() {
            Some(c) => Some(
                UserCategory::parse(c)
                    .ok_or_else(|| DbError::Query(format!("unknown user category: {c}")))?,
            ),
            None => None,
        };
        Ok(User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            status: parse_status(&self.status)?,
            category,
            phone_number: self.phone_number,
            tax_id: self.tax_id,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
            roles: parse_roles(&self.roles)?,
        })
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        let row = UserRow {
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            status: self.status,
            category: self.category,
            phone_number: self.phone_number,
            tax_id: self.tax_id,
            image_url: self.image_url,
            roles: self.roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        row.into_user(id)
    }
}

fn order_clause(pagination: &Pagination) -> String {
    let key = match pagination.sort_key {
        SortKey::CreatedAt => "created_at",
        SortKey::Username => "username",
        SortKey::Email => "email",
    };
    let direction = match pagination.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!("ORDER BY {key} {direction}")
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

/// Translate a store error from `save` into the engine-facing
/// taxonomy: unique-index violations become `DuplicateIdentity`.
fn translate_save_error(err: surrealdb::Error, user: &User) -> CulinaError {
    match duplicate_user_field(&err) {
        Some("username") => CulinaError::DuplicateIdentity {
            field: "username",
            value: user.username.clone(),
        },
        Some("email") => CulinaError::DuplicateIdentity {
            field: "email",
            value: user.email.clone(),
        },
        _ => DbError::from(err).into(),
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn exists_by_username(&self, username: &str) -> CulinaResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM user \
                 WHERE username = $username GROUP ALL",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }

    async fn exists_by_email(&self, email: &str) -> CulinaResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM user \
                 WHERE email = $email GROUP ALL",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> CulinaResult<Option<User>> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('user', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.into_user(id)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> CulinaResult<Option<User>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_user()?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: &User) -> CulinaResult<User> {
        let id_str = user.id.to_string();
        let roles: Vec<String> = user.roles.iter().map(|r| r.as_str().to_string()).collect();

        let result = self
            .db
            .query(
                "UPSERT type::record('user', $id) SET \
                 username = $username, email = $email, \
                 password_hash = $password_hash, \
                 full_name = $full_name, \
                 status = $status, category = $category, \
                 phone_number = $phone_number, tax_id = $tax_id, \
                 image_url = $image_url, roles = $roles, \
                 created_at = $created_at, updated_at = $updated_at",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", user.username.clone()))
            .bind(("email", user.email.clone()))
            .bind(("password_hash", user.password_hash.clone()))
            .bind(("full_name", user.full_name.clone()))
            .bind(("status", status_to_string(user.status)))
            .bind(("category", user.category.map(|c| c.as_str().to_string())))
            .bind(("phone_number", user.phone_number.clone()))
            .bind(("tax_id", user.tax_id.clone()))
            .bind(("image_url", user.image_url.clone()))
            .bind(("roles", roles))
            .bind(("created_at", user.created_at))
            .bind(("updated_at", user.updated_at))
            .await
            .map_err(|e| translate_save_error(e, user))?;

        let mut result = result.check().map_err(|e| translate_save_error(e, user))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "user",
            id: id_str,
        })?;

        Ok(row.into_user(user.id)?)
    }

    async fn list(&self, pagination: Pagination) -> CulinaResult<PaginatedResult<User>> {
        let mut count_result = self
            .db
            .query("SELECT count() AS total FROM user GROUP ALL")
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM user \
             {} LIMIT $limit START $offset",
            order_clause(&pagination)
        );

        let mut result = self
            .db
            .query(&query)
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }

    async fn delete(&self, user: &User) -> CulinaResult<()> {
        self.db
            .query("DELETE type::record('user', $id)")
            .bind(("id", user.id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }
}
