//! Role domain model.
//!
//! Roles are read-only reference data drawn from a fixed catalog,
//! seeded once at startup.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed role catalog. One entry per user category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    Customer,
    Admin,
    Delivery,
    Chef,
}

impl RoleName {
    pub const CATALOG: [RoleName; 4] = [
        RoleName::Customer,
        RoleName::Admin,
        RoleName::Delivery,
        RoleName::Chef,
    ];

    /// Authority string embedded in token role claims.
    pub fn authority(self) -> &'static str {
        match self {
            RoleName::Customer => "ROLE_CUSTOMER",
            RoleName::Admin => "ROLE_ADMIN",
            RoleName::Delivery => "ROLE_DELIVERY",
            RoleName::Chef => "ROLE_CHEF",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::Customer => "Customer",
            RoleName::Admin => "Admin",
            RoleName::Delivery => "Delivery",
            RoleName::Chef => "Chef",
        }
    }

    pub fn parse(s: &str) -> Option<RoleName> {
        match s {
            "Customer" => Some(RoleName::Customer),
            "Admin" => Some(RoleName::Admin),
            "Delivery" => Some(RoleName::Delivery),
            "Chef" => Some(RoleName::Chef),
            _ => None,
        }
    }
}

/// A seeded role record. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: RoleName,
}
