//! User lifecycle event model.
//!
//! Events are emitted to downstream services, never stored by this
//! core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::{UserCategory, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Create,
    Update,
}

/// Logical destination for lifecycle events. Delivery and chef
/// registrations are announced on a distinct channel for the
/// delivery-network services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventChannel {
    General,
    DeliveryNetwork,
}

impl EventChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            EventChannel::General => "user-events",
            EventChannel::DeliveryNetwork => "deliveryman-events",
        }
    }
}

/// A projection of a user record plus an action tag. The password
/// hash is never part of the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEvent {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub status: UserStatus,
    pub category: Option<UserCategory>,
    pub phone_number: Option<String>,
    pub tax_id: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "actionType")]
    pub action: ActionType,
}
