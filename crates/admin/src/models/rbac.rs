//! Role-based access control records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use lexiops_core::listview::{ListRecord, SortValue};
use lexiops_core::{ActionId, RoleId};

use crate::store::Identified;

/// A grantable role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Unique, stable role ID.
    pub id: RoleId,
    /// Role name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl Identified for Role {
    type Id = RoleId;

    fn id(&self) -> RoleId {
        self.id
    }
}

impl ListRecord for Role {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.description.as_str()),
        ]
    }

    fn facet_value(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        (key == "name").then_some(SortValue::Text(&self.name))
    }
}

/// A named action a role can be granted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionDef {
    /// Unique, stable action ID.
    pub id: ActionId,
    /// Machine name ("manage_users").
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl Identified for ActionDef {
    type Id = ActionId;

    fn id(&self) -> ActionId {
        self.id
    }
}

impl ListRecord for ActionDef {
    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.description.as_str()),
        ]
    }

    fn facet_value(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        (key == "name").then_some(SortValue::Text(&self.name))
    }
}

/// A single (role, action) grant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    pub role_id: RoleId,
    pub action_id: ActionId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexiops_core::listview::FilterSet;

    #[test]
    fn test_role_search_covers_description() {
        let role = Role {
            id: RoleId::new(3),
            name: "Viewer".to_string(),
            description: "Read-only access to most parts of the system.".to_string(),
        };
        assert!(FilterSet::new().query("read-only").matches(&role));
        assert!(FilterSet::new().query("viewer").matches(&role));
    }
}
