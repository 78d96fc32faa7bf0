//! Account domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lexiops_core::{AccountId, Email};

/// A registered account (domain type).
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address, unique within the directory.
    pub email: Email,
    /// Argon2 hash of the account's password.
    pub password_hash: String,
    /// When the account registered.
    pub created_at: DateTime<Utc>,
}

/// The authenticated account stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentAccount {
    pub id: AccountId,
    pub name: String,
    pub email: Email,
}

impl From<&Account> for CurrentAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

/// Session keys used by the site.
pub mod session_keys {
    /// Session key for the authenticated account.
    pub const CURRENT_ACCOUNT: &str = "current_account";

    /// Session key for the chat transcript handle.
    pub const CHAT_KEY: &str = "chat_key";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_account_from_account() {
        let account = Account {
            id: AccountId::new(3),
            name: "Jane".to_string(),
            email: Email::parse("jane@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        };

        let current = CurrentAccount::from(&account);
        assert_eq!(current.id, AccountId::new(3));
        assert_eq!(current.email.as_str(), "jane@example.com");

        let json = serde_json::to_string(&current).unwrap();
        assert!(!json.contains("argon2"));
    }
}
