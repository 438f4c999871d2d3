//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in the
//! database crate; the engine and auth layers depend only on these
//! traits.

use uuid::Uuid;

use crate::error::CulinaResult;
use crate::models::role::{Role, RoleName};
use crate::models::user::User;

/// Whitelisted sort keys for user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Username,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            sort_key: SortKey::CreatedAt,
            direction: SortDirection::Asc,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Keyed store of user records. The backing store's unique indexes
/// are the final authority for the username/email uniqueness
/// invariant; the existence checks are only a fast-path rejection.
pub trait UserRepository: Send + Sync {
    fn exists_by_username(&self, username: &str)
    -> impl Future<Output = CulinaResult<bool>> + Send;

    fn exists_by_email(&self, email: &str) -> impl Future<Output = CulinaResult<bool>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = CulinaResult<Option<User>>> + Send;

    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = CulinaResult<Option<User>>> + Send;

    /// Insert or full replace; returns the persisted representation.
    /// A store-level uniqueness violation surfaces as
    /// [`crate::CulinaError::DuplicateIdentity`].
    fn save(&self, user: &User) -> impl Future<Output = CulinaResult<User>> + Send;

    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = CulinaResult<PaginatedResult<User>>> + Send;

    fn delete(&self, user: &User) -> impl Future<Output = CulinaResult<()>> + Send;
}

/// Lookup-only catalog of seeded roles.
pub trait RoleRepository: Send + Sync {
    /// Absence is a valid outcome, not an error; callers decide
    /// whether missing catalog data is fatal.
    fn find_by_name(
        &self,
        name: RoleName,
    ) -> impl Future<Output = CulinaResult<Option<Role>>> + Send;
}
