//! User lifecycle orchestration.
//!
//! The engine is stateless between calls; all mutable state lives in
//! the user repository. Every event-emitting operation follows the
//! same ordering: check → resolve → hash → persist → publish. The
//! publish step is best-effort — a failure after a successful persist
//! is logged and accepted, never rolled back.

use chrono::Utc;
use culina_core::error::{CulinaError, CulinaResult};
use culina_core::models::event::{ActionType, EventChannel};
use culina_core::models::user::{ProfileUpdate, RegisterUser, User, UserCategory, UserStatus};
use culina_core::publisher::EventSink;
use culina_core::repository::{
    PaginatedResult, Pagination, RoleRepository, UserRepository,
};
use tracing::{info, warn};
use uuid::Uuid;

use culina_auth::password;

/// Registration and lifecycle engine.
///
/// Generic over the repositories and the event sink so the engine
/// has no dependency on the database crate or any transport.
pub struct UserService<U, R, P>
where
    U: UserRepository,
    R: RoleRepository,
    P: EventSink,
{
    users: U,
    roles: R,
    events: P,
}

fn validate_registration(input: &RegisterUser) -> CulinaResult<()> {
    if input.username.len() < 3 || input.username.len() > 30 {
        return Err(CulinaError::Validation {
            message: "username must be 3-30 characters".into(),
        });
    }
    if input.email.is_empty() || input.email.len() > 60 || !input.email.contains('@') {
        return Err(CulinaError::Validation {
            message: "email must be a valid address of at most 60 characters".into(),
        });
    }
    if input.password.len() < 8 {
        return Err(CulinaError::Validation {
            message: "password must be at least 8 characters".into(),
        });
    }
    if input.full_name.is_empty() || input.full_name.len() > 100 {
        return Err(CulinaError::Validation {
            message: "full name must be 1-100 characters".into(),
        });
    }
    Ok(())
}

impl<U, R, P> UserService<U, R, P>
where
    U: UserRepository,
    R: RoleRepository,
    P: EventSink,
{
    pub fn new(users: U, roles: R, events: P) -> Self {
        Self {
            users,
            roles,
            events,
        }
    }

    /// Register a new user under the given category.
    ///
    /// Ordering: uniqueness checks → role resolution → password hash
    /// → persist → publish CREATE. Validation failures abort before
    /// any mutation; the store's unique indexes remain the final
    /// guard against concurrent duplicate registrations.
    pub async fn register(
        &self,
        category: UserCategory,
        input: RegisterUser,
    ) -> CulinaResult<User> {
        validate_registration(&input)?;

        if self.users.exists_by_username(&input.username).await? {
            return Err(CulinaError::DuplicateIdentity {
                field: "username",
                value: input.username,
            });
        }
        if self.users.exists_by_email(&input.email).await? {
            return Err(CulinaError::DuplicateIdentity {
                field: "email",
                value: input.email,
            });
        }

        let role = self
            .roles
            .find_by_name(category.role())
            .await?
            .ok_or_else(|| {
                CulinaError::Configuration(format!(
                    "role catalog is missing entry: {}",
                    category.role().as_str()
                ))
            })?;

        let password_hash = password::hash_password(&input.password)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            password_hash,
            full_name: input.full_name,
            status: UserStatus::Active,
            category: Some(category),
            phone_number: input.phone_number,
            tax_id: input.tax_id,
            image_url: None,
            created_at: now,
            updated_at: now,
            roles: vec![role.name],
        };

        let user = self.users.save(&user).await?;
        self.emit(&user, ActionType::Create).await;

        info!(user_id = %user.id, category = category.as_str(), "user registered");
        Ok(user)
    }

    /// Block a user. Irreversible; re-applying to an already-blocked
    /// user is a no-op that still succeeds.
    pub async fn deactivate(&self, id: Uuid) -> CulinaResult<User> {
        let mut user = self.require(id).await?;

        user.status = UserStatus::Blocked;
        user.updated_at = Utc::now();

        let user = self.users.save(&user).await?;
        self.emit(&user, ActionType::Update).await;

        info!(user_id = %user.id, "user deactivated");
        Ok(user)
    }

    /// Overwrite the mutable profile fields that were supplied;
    /// fields left `None` are untouched.
    pub async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> CulinaResult<User> {
        let mut user = self.require(id).await?;

        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(tax_id) = update.tax_id {
            user.tax_id = Some(tax_id);
        }
        user.updated_at = Utc::now();

        let user = self.users.save(&user).await?;
        self.emit(&user, ActionType::Update).await;

        Ok(user)
    }

    /// Replace the stored password hash after verifying the old
    /// password. Password changes are not broadcast.
    pub async fn change_password(
        &self,
        id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> CulinaResult<()> {
        let mut user = self.require(id).await?;

        if !password::verify_password(old_password, &user.password_hash) {
            return Err(CulinaError::CredentialMismatch);
        }

        user.password_hash = password::hash_password(new_password)?;
        user.updated_at = Utc::now();
        self.users.save(&user).await?;

        info!(user_id = %user.id, "password changed");
        Ok(())
    }

    /// Overwrite the image reference, including clearing it when the
    /// new value is absent. No event is emitted.
    pub async fn update_image(&self, id: Uuid, image_url: Option<String>) -> CulinaResult<User> {
        let mut user = self.require(id).await?;

        user.image_url = image_url;
        user.updated_at = Utc::now();

        self.users.save(&user).await
    }

    pub async fn get_user(&self, id: Uuid) -> CulinaResult<User> {
        self.require(id).await
    }

    pub async fn list_users(&self, pagination: Pagination) -> CulinaResult<PaginatedResult<User>> {
        self.users.list(pagination).await
    }

    async fn require(&self, id: Uuid) -> CulinaResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CulinaError::NotFound {
                entity: "user",
                id: id.to_string(),
            })
    }

    /// Publish a lifecycle event on the channel for the user's
    /// category. A failure here leaves the already-persisted state
    /// untouched and is logged for operators.
    async fn emit(&self, user: &User, action: ActionType) {
        let channel = user
            .category
            .map(UserCategory::channel)
            .unwrap_or(EventChannel::General);

        if let Err(e) = self.events.publish(user.to_event(action), channel).await {
            warn!(
                user_id = %user.id,
                channel = channel.as_str(),
                error = %e,
                "lifecycle event publish failed; state already persisted"
            );
        }
    }
}
