//! Record store CRUD and the permission grant set, over the real seeds.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use chrono::NaiveDate;

use lexiops_admin::models::User;
use lexiops_admin::store::{PermissionGrants, RecordStore, StoreError, seed};
use lexiops_core::{ActionId, Email, RoleId, UserId, UserRole, UserStatus};

fn seeded_users() -> RecordStore<User> {
    RecordStore::with_records(seed::users())
}

#[test]
fn seeds_have_unique_ids_and_expected_counts() {
    assert_eq!(seed::users().len(), 15);
    assert_eq!(seed::files().len(), 12);
    assert_eq!(seed::workspaces().len(), 8);
    assert_eq!(seed::plans().len(), 3);

    let emails: HashSet<_> = seed::users().into_iter().map(|u| u.email).collect();
    assert_eq!(emails.len(), 15);
}

#[test]
fn create_edit_delete_roundtrip() {
    let store = seeded_users();
    let id = store.next_id();
    assert_eq!(id, UserId::new(16));

    store
        .insert(User {
            id,
            name: "Test Person".to_string(),
            email: Email::parse("test@example.com").unwrap(),
            role: UserRole::User,
            status: UserStatus::Pending,
            joined: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        })
        .unwrap();
    assert_eq!(store.len(), 16);

    let mut updated = store.get(id).unwrap();
    updated.status = UserStatus::Active;
    store.replace(updated).unwrap();
    assert_eq!(store.get(id).unwrap().status, UserStatus::Active);

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.name, "Test Person");
    assert_eq!(store.len(), 15);
    assert!(matches!(store.remove(id), Err(StoreError::NotFound)));
}

#[test]
fn insert_rejects_a_reused_id() {
    let store = seeded_users();
    let clash = User {
        id: UserId::new(1),
        name: "Impostor".to_string(),
        email: Email::parse("impostor@example.com").unwrap(),
        role: UserRole::User,
        status: UserStatus::Active,
        joined: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    };
    assert!(matches!(
        store.insert(clash),
        Err(StoreError::Conflict(_))
    ));
    assert_eq!(store.len(), 15);
}

#[test]
fn mutations_are_visible_to_later_snapshots() {
    let store = seeded_users();
    let before = store.snapshot();

    store.remove(UserId::new(3)).unwrap();
    let after = store.snapshot();

    assert_eq!(before.len(), 15);
    assert_eq!(after.len(), 14);
    assert!(after.iter().all(|u| u.id != UserId::new(3)));

    // The earlier snapshot is untouched; views derive from the store, not
    // the other way around.
    assert_eq!(before.len(), 15);
}

#[test]
fn seeded_grants_toggle_and_cascade() {
    let grants = PermissionGrants::with_grants(seed::permissions());
    let admin = RoleId::new(1);
    let editor = RoleId::new(2);
    let viewer = RoleId::new(3);
    let manage_plans = ActionId::new(4);

    // The seed gives the admin role everything, the viewer one action.
    assert_eq!(grants.count_for_role(admin), 4);
    assert_eq!(grants.count_for_role(viewer), 1);
    assert!(!grants.has(editor, manage_plans));

    // Toggle on, toggle off.
    assert!(grants.toggle(editor, manage_plans));
    assert!(grants.has(editor, manage_plans));
    assert!(!grants.toggle(editor, manage_plans));
    assert!(!grants.has(editor, manage_plans));

    // Deleting a role drops its grants and nobody else's.
    grants.remove_role(admin);
    assert_eq!(grants.count_for_role(admin), 0);
    assert_eq!(grants.count_for_role(viewer), 1);

    // Deleting an action clears that column.
    grants.remove_action(ActionId::new(1));
    assert_eq!(grants.count_for_role(viewer), 0);
}
