//! The (role, action) grant set.

use std::sync::{PoisonError, RwLock};

use lexiops_core::{ActionId, RoleId};

use crate::models::Permission;

/// The in-memory set of (role, action) grants.
///
/// Grants have no identity of their own; toggling the same pair twice
/// returns the set to its prior state.
#[derive(Debug)]
pub struct PermissionGrants {
    grants: RwLock<Vec<Permission>>,
}

impl PermissionGrants {
    /// Create a grant set over seed grants.
    #[must_use]
    pub const fn with_grants(grants: Vec<Permission>) -> Self {
        Self {
            grants: RwLock::new(grants),
        }
    }

    /// Snapshot the grants in their current order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Permission> {
        self.read().clone()
    }

    /// Whether a role is granted an action.
    #[must_use]
    pub fn has(&self, role_id: RoleId, action_id: ActionId) -> bool {
        self.read()
            .iter()
            .any(|p| p.role_id == role_id && p.action_id == action_id)
    }

    /// Toggle a grant; returns whether the grant is now present.
    pub fn toggle(&self, role_id: RoleId, action_id: ActionId) -> bool {
        let mut grants = self.write();
        if let Some(index) = grants
            .iter()
            .position(|p| p.role_id == role_id && p.action_id == action_id)
        {
            grants.remove(index);
            false
        } else {
            grants.push(Permission { role_id, action_id });
            true
        }
    }

    /// Drop every grant that references a role.
    pub fn remove_role(&self, role_id: RoleId) {
        self.write().retain(|p| p.role_id != role_id);
    }

    /// Drop every grant that references an action.
    pub fn remove_action(&self, action_id: ActionId) {
        self.write().retain(|p| p.action_id != action_id);
    }

    /// Number of grants held by a role.
    #[must_use]
    pub fn count_for_role(&self, role_id: RoleId) -> usize {
        self.read().iter().filter(|p| p.role_id == role_id).count()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Permission>> {
        self.grants.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Permission>> {
        self.grants.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        let grants = PermissionGrants::with_grants(vec![]);
        let role = RoleId::new(1);
        let action = ActionId::new(2);

        assert!(!grants.has(role, action));
        assert!(grants.toggle(role, action));
        assert!(grants.has(role, action));
        assert!(!grants.toggle(role, action));
        assert!(!grants.has(role, action));
    }

    #[test]
    fn test_remove_role_drops_its_grants() {
        let grants = PermissionGrants::with_grants(vec![
            Permission {
                role_id: RoleId::new(1),
                action_id: ActionId::new(1),
            },
            Permission {
                role_id: RoleId::new(2),
                action_id: ActionId::new(1),
            },
        ]);

        grants.remove_role(RoleId::new(1));
        assert!(!grants.has(RoleId::new(1), ActionId::new(1)));
        assert!(grants.has(RoleId::new(2), ActionId::new(1)));
    }

    #[test]
    fn test_count_for_role() {
        let grants = PermissionGrants::with_grants(vec![
            Permission {
                role_id: RoleId::new(1),
                action_id: ActionId::new(1),
            },
            Permission {
                role_id: RoleId::new(1),
                action_id: ActionId::new(2),
            },
        ]);
        assert_eq!(grants.count_for_role(RoleId::new(1)), 2);
        assert_eq!(grants.count_for_role(RoleId::new(3)), 0);
    }
}
