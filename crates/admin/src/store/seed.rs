//! Seed data for the record collections.
//!
//! Every collection is seeded at startup with the same fixture records the
//! product demos with. Mutations through the panel replace records in
//! memory only; a restart returns to these values.

use chrono::NaiveDate;

use lexiops_core::{
    ActionId, ByteSize, Email, FileId, FileKind, FileStatus, PlanId, PlanStatus, Price, RoleId,
    UserId, UserRole, UserStatus, WorkspaceId, WorkspaceStatus,
};

use crate::models::{ActionDef, FileRecord, Permission, Plan, Role, User, Workspace};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn email(address: &str) -> Email {
    Email::parse(address).expect("valid seed email")
}

fn user(
    id: i32,
    name: &str,
    address: &str,
    role: UserRole,
    status: UserStatus,
    joined: (i32, u32, u32),
) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email(address),
        role,
        status,
        joined: date(joined.0, joined.1, joined.2),
    }
}

/// The seeded user collection.
#[must_use]
pub fn users() -> Vec<User> {
    use UserRole::{Admin, Moderator, User as Member};
    use UserStatus::{Active, Inactive, Pending};

    vec![
        user(1, "Sathya Prakash", "sathya@example.com", Admin, Active, (2024, 1, 15)),
        user(2, "Jane Smith", "jane@example.com", Member, Active, (2024, 2, 10)),
        user(3, "Mike Johnson", "mike@example.com", Member, Inactive, (2023, 12, 5)),
        user(4, "Sarah Williams", "sarah@example.com", Moderator, Active, (2024, 2, 28)),
        user(5, "Alex Brown", "alex@example.com", Member, Pending, (2024, 3, 1)),
        user(6, "James Wilson", "james@example.com", Member, Active, (2024, 1, 20)),
        user(7, "Emily Davis", "emily@example.com", Member, Active, (2024, 2, 15)),
        user(8, "Robert Taylor", "robert@example.com", Moderator, Inactive, (2023, 11, 30)),
        user(9, "Linda Moore", "linda@example.com", Member, Pending, (2024, 3, 5)),
        user(10, "William Martin", "william@example.com", Member, Active, (2024, 1, 10)),
        user(11, "Patricia White", "patricia@example.com", Admin, Active, (2023, 10, 25)),
        user(12, "Richard Thompson", "richard@example.com", Member, Inactive, (2024, 2, 5)),
        user(13, "Barbara Garcia", "barbara@example.com", Member, Active, (2024, 1, 5)),
        user(14, "Joseph Martinez", "joseph@example.com", Moderator, Pending, (2024, 3, 10)),
        user(15, "Susan Robinson", "susan@example.com", Member, Active, (2024, 2, 20)),
    ]
}

fn file(
    id: i32,
    name: &str,
    kind: FileKind,
    size: ByteSize,
    status: FileStatus,
    modified: (i32, u32, u32),
) -> FileRecord {
    FileRecord {
        id: FileId::new(id),
        name: name.to_string(),
        kind,
        size,
        status,
        modified: date(modified.0, modified.1, modified.2),
    }
}

/// The seeded file collection.
#[must_use]
pub fn files() -> Vec<FileRecord> {
    use FileKind::{Audio, Doc, Image, Pdf, Spreadsheet, Text, Video};
    use FileStatus::{Failed, Processing, Stored};

    vec![
        file(1, "Project_Proposal.pdf", Pdf, ByteSize::new(2_400_000), Stored, (2024, 3, 10)),
        file(2, "Annual_Report_2023.pdf", Pdf, ByteSize::new(5_100_000), Stored, (2024, 2, 15)),
        file(3, "Meeting_Notes.docx", Doc, ByteSize::new(450_000), Stored, (2024, 3, 12)),
        file(4, "Financial_Q1.xlsx", Spreadsheet, ByteSize::new(1_200_000), Stored, (2024, 3, 8)),
        file(5, "Script_Content.txt", Text, ByteSize::new(12_000), Stored, (2024, 3, 1)),
        file(6, "User_Feedback.pdf", Pdf, ByteSize::new(1_800_000), Processing, (2024, 3, 14)),
        file(7, "Competitor_Analysis.docx", Doc, ByteSize::new(890_000), Stored, (2024, 2, 28)),
        file(8, "Inventory_List.xlsx", Spreadsheet, ByteSize::new(2_100_000), Failed, (2024, 1, 20)),
        file(9, "Profile_Picture.png", Image, ByteSize::new(1_200_000), Stored, (2024, 3, 15)),
        file(10, "Intro_Video.mp4", Video, ByteSize::new(75_400_000), Stored, (2024, 3, 5)),
        file(11, "Theme_Music.mp3", Audio, ByteSize::new(4_200_000), Stored, (2024, 3, 13)),
        file(12, "Product_Specs.docx", Doc, ByteSize::new(2_300_000), Stored, (2024, 3, 2)),
    ]
}

fn workspace(
    id: i32,
    name: &str,
    members: u32,
    storage_used: ByteSize,
    storage_limit_gb: u32,
    status: WorkspaceStatus,
    last_activity: (i32, u32, u32),
) -> Workspace {
    Workspace {
        id: WorkspaceId::new(id),
        name: name.to_string(),
        members,
        storage_used,
        storage_limit_gb,
        status,
        last_activity: date(last_activity.0, last_activity.1, last_activity.2),
    }
}

/// The seeded workspace collection.
#[must_use]
pub fn workspaces() -> Vec<Workspace> {
    use WorkspaceStatus::{Active, Inactive};

    vec![
        workspace(1, "Design Team", 12, ByteSize::new(45_200_000_000), 100, Active, (2024, 3, 15)),
        workspace(2, "Engineering Core", 45, ByteSize::new(120_500_000_000), 500, Active, (2024, 3, 14)),
        workspace(3, "Marketing Labs", 8, ByteSize::new(12_800_000_000), 50, Active, (2024, 3, 12)),
        workspace(4, "Sales Force", 24, ByteSize::new(5_400_000_000), 100, Active, (2024, 3, 10)),
        workspace(5, "Customer Success", 15, ByteSize::new(2_100_000_000), 50, Inactive, (2024, 2, 28)),
        workspace(6, "Product Strategy", 6, ByteSize::new(18_900_000_000), 100, Active, (2024, 3, 13)),
        workspace(7, "Human Resources", 4, ByteSize::new(1_200_000_000), 20, Active, (2024, 3, 1)),
        workspace(8, "Legal & Compliance", 3, ByteSize::new(800_000_000), 20, Active, (2024, 3, 5)),
    ]
}

/// The seeded plan collection.
#[must_use]
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::new(1),
            name: "Free".to_string(),
            max_documents: 5,
            max_storage_mb: 50,
            max_members: 1,
            price: Price::from_dollars(0),
            status: PlanStatus::Active,
        },
        Plan {
            id: PlanId::new(2),
            name: "Pro".to_string(),
            max_documents: 100,
            max_storage_mb: 2048,
            max_members: 5,
            price: Price::from_dollars(19),
            status: PlanStatus::Active,
        },
        Plan {
            id: PlanId::new(3),
            name: "Enterprise".to_string(),
            max_documents: 5000,
            max_storage_mb: 51_200,
            max_members: 50,
            price: Price::from_dollars(99),
            status: PlanStatus::Active,
        },
    ]
}

/// The seeded role collection.
#[must_use]
pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: RoleId::new(1),
            name: "Admin".to_string(),
            description: "Full system access with all permissions.".to_string(),
        },
        Role {
            id: RoleId::new(2),
            name: "Editor".to_string(),
            description: "Can manage content and files but cannot change system settings."
                .to_string(),
        },
        Role {
            id: RoleId::new(3),
            name: "Viewer".to_string(),
            description: "Read-only access to most parts of the system.".to_string(),
        },
    ]
}

/// The seeded action collection.
#[must_use]
pub fn actions() -> Vec<ActionDef> {
    vec![
        ActionDef {
            id: ActionId::new(1),
            name: "view_dashboard".to_string(),
            description: "Access the main admin dashboard.".to_string(),
        },
        ActionDef {
            id: ActionId::new(2),
            name: "manage_users".to_string(),
            description: "Create, edit, and delete user accounts.".to_string(),
        },
        ActionDef {
            id: ActionId::new(3),
            name: "manage_files".to_string(),
            description: "Upload and delete files.".to_string(),
        },
        ActionDef {
            id: ActionId::new(4),
            name: "manage_plans".to_string(),
            description: "Modify subscription plans and pricing.".to_string(),
        },
    ]
}

/// The seeded (role, action) grants.
#[must_use]
pub fn permissions() -> Vec<Permission> {
    let grant = |role: i32, action: i32| Permission {
        role_id: RoleId::new(role),
        action_id: ActionId::new(action),
    };

    vec![
        grant(1, 1),
        grant(1, 2),
        grant(1, 3),
        grant(1, 4),
        grant(2, 1),
        grant(2, 3),
        grant(3, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        assert_eq!(users().len(), 15);
        assert_eq!(files().len(), 12);
        assert_eq!(workspaces().len(), 8);
        assert_eq!(plans().len(), 3);
        assert_eq!(roles().len(), 3);
        assert_eq!(actions().len(), 4);
        assert_eq!(permissions().len(), 7);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<_> = users().iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 15);
        let ids: HashSet<_> = files().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 12);
        let ids: HashSet<_> = workspaces().iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_permissions_reference_seeded_records() {
        let role_ids: HashSet<_> = roles().iter().map(|r| r.id).collect();
        let action_ids: HashSet<_> = actions().iter().map(|a| a.id).collect();
        for grant in permissions() {
            assert!(role_ids.contains(&grant.role_id));
            assert!(action_ids.contains(&grant.action_id));
        }
    }

    #[test]
    fn test_three_seeded_pdf_files() {
        let pdfs = files()
            .iter()
            .filter(|f| f.kind == FileKind::Pdf)
            .count();
        assert_eq!(pdfs, 3);
    }
}
