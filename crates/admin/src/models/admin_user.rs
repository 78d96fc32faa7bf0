//! Admin account domain types.
//!
//! These types represent validated domain objects for admin authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lexiops_core::{AdminRole, AdminUserId, Email};

/// An admin account (domain type).
///
/// Separate from the managed [`super::User`] records - these are the
/// operators who can sign in to the panel itself.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    /// Unique admin account ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: Email,
    /// Admin's display name.
    pub name: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// Argon2 hash of the admin's password.
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl crate::store::Identified for AdminAccount {
    type Id = AdminUserId;

    fn id(&self) -> AdminUserId {
        self.id
    }
}

/// The authenticated admin stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminAccount> for CurrentAdmin {
    fn from(account: &AdminAccount) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
        }
    }
}

/// Session keys used by the admin panel.
pub mod session_keys {
    /// Session key for the authenticated admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_admin_serialization() {
        let admin = CurrentAdmin {
            id: AdminUserId::new(1),
            email: Email::parse("ops@lexiops.dev").unwrap(),
            name: "Ops".to_string(),
            role: AdminRole::SuperAdmin,
        };

        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains("\"role\":\"super_admin\""));

        let parsed: CurrentAdmin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, AdminRole::SuperAdmin);
    }
}
