//! Database-specific error types and conversions.

use culina_core::error::CulinaError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: String,
    },
}

impl From<DbError> for CulinaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CulinaError::NotFound { entity, id },
            other => CulinaError::Database(other.to_string()),
        }
    }
}

/// Inspect a SurrealDB error for a unique-index violation on the
/// user table and name the conflicting field.
///
/// The store reports violations by index name, e.g.
/// `Database index 'idx_user_username' already contains ...`.
pub(crate) fn duplicate_user_field(err: &surrealdb::Error) -> Option<&'static str> {
    let msg = err.to_string();
    if msg.contains("idx_user_username") {
        Some("username")
    } else if msg.contains("idx_user_email") {
        Some("email")
    } else {
        None
    }
}
