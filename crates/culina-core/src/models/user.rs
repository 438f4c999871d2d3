//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event::{ActionType, EventChannel, UserEvent};
use crate::models::role::RoleName;

/// Status transitions are one-directional: Active → Blocked.
/// There is no reactivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserCategory {
    Customer,
    Admin,
    Delivery,
    Chef,
}

impl UserCategory {
    /// Default role bound at registration.
    pub fn role(self) -> RoleName {
        match self {
            UserCategory::Customer => RoleName::Customer,
            UserCategory::Admin => RoleName::Admin,
            UserCategory::Delivery => RoleName::Delivery,
            UserCategory::Chef => RoleName::Chef,
        }
    }

    /// Logical event channel for this category's lifecycle events.
    /// Delivery and chef accounts are announced to the delivery
    /// network; everyone else goes to the general channel.
    pub fn channel(self) -> EventChannel {
        match self {
            UserCategory::Customer | UserCategory::Admin => EventChannel::General,
            UserCategory::Delivery | UserCategory::Chef => EventChannel::DeliveryNetwork,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserCategory::Customer => "Customer",
            UserCategory::Admin => "Admin",
            UserCategory::Delivery => "Delivery",
            UserCategory::Chef => "Chef",
        }
    }

    pub fn parse(s: &str) -> Option<UserCategory> {
        match s {
            "Customer" => Some(UserCategory::Customer),
            "Admin" => Some(UserCategory::Admin),
            "Delivery" => Some(UserCategory::Delivery),
            "Chef" => Some(UserCategory::Chef),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2id PHC string. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub full_name: String,
    pub status: UserStatus,
    /// Exactly one category once registered.
    pub category: Option<UserCategory>,
    pub phone_number: Option<String>,
    pub tax_id: Option<String>,
    pub image_url: Option<String>,
    /// Immutable post-creation. `created_at <= updated_at` always.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Non-empty after registration completes.
    pub roles: Vec<RoleName>,
}

impl User {
    /// Project this record into a lifecycle event (password hash
    /// excluded by construction).
    pub fn to_event(&self, action: ActionType) -> UserEvent {
        UserEvent {
            user_id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            status: self.status,
            category: self.category,
            phone_number: self.phone_number.clone(),
            tax_id: self.tax_id.clone(),
            image_url: self.image_url.clone(),
            action,
        }
    }
}

/// Payload for the registration flow.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub tax_id: Option<String>,
}

/// Partial profile update. Fields left `None` are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub tax_id: Option<String>,
}
