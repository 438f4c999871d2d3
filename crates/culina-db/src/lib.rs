//! CULINA Database — SurrealDB connection management and repository
//! implementations.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Repository implementations for the `culina-core` traits
//! - Error types ([`DbError`])
//!
//! The unique indexes on `user.username` and `user.email` are the
//! final authority for the uniqueness invariant; violations are
//! translated into `CulinaError::DuplicateIdentity`.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use repository::{SurrealRoleRepository, SurrealUserRepository};
pub use schema::run_migrations;
