//! Managed user account records.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lexiops_core::listview::{ListRecord, SortValue};
use lexiops_core::{Email, UserId, UserRole, UserStatus};

use crate::store::Identified;

/// A managed user account, as shown on the users page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique, stable user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Account role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Calendar date the user joined.
    pub joined: NaiveDate,
}

impl Identified for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl ListRecord for User {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
        ]
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "role" => Some(Cow::Borrowed(self.role.label())),
            "status" => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::Text(&self.name)),
            "joined" => Some(SortValue::Date(self.joined)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexiops_core::listview::FilterSet;

    fn user(name: &str, email: &str, role: UserRole) -> User {
        User {
            id: UserId::new(1),
            name: name.to_string(),
            email: Email::parse(email).unwrap(),
            role,
            status: UserStatus::Active,
            joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let u = user("Jane Smith", "jane@example.com", UserRole::User);
        assert!(FilterSet::new().query("smith").matches(&u));
        assert!(FilterSet::new().query("jane@").matches(&u));
        assert!(!FilterSet::new().query("mike").matches(&u));
    }

    #[test]
    fn test_role_facet() {
        let u = user("Jane Smith", "jane@example.com", UserRole::Moderator);
        assert!(FilterSet::new().facet("role", "Moderator").matches(&u));
        assert!(!FilterSet::new().facet("role", "Admin").matches(&u));
    }

    #[test]
    fn test_sort_keys() {
        let u = user("Jane Smith", "jane@example.com", UserRole::User);
        assert!(matches!(u.sort_value("name"), Some(SortValue::Text(_))));
        assert!(matches!(u.sort_value("joined"), Some(SortValue::Date(_))));
        assert!(u.sort_value("email").is_none());
    }
}
