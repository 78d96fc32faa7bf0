//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    filters,
    middleware::auth::RequireAdminAuth,
    models::{CurrentAdmin, FileRecord, User},
    state::AppState,
};

use lexiops_core::{AdminRole, ByteSize, FileKind, UserStatus, WorkspaceStatus};

/// Admin user view for templates.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub email: String,
    pub is_super_admin: bool,
}

impl From<&CurrentAdmin> for AdminUserView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.to_string(),
            is_super_admin: admin.role == AdminRole::SuperAdmin,
        }
    }
}

/// Dashboard stat tiles.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_users: String,
    pub active_workspaces: String,
    pub total_files: String,
    pub storage_used: String,
}

/// One bar of the weekly user-growth chart.
#[derive(Debug, Clone)]
pub struct GrowthPoint {
    pub day: &'static str,
    pub users: u32,
    /// Bar height as a percentage of the weekly maximum.
    pub percent: u32,
}

/// Signups per weekday for the growth chart.
///
/// The product has no signup log to derive this from; the series is the
/// same demo data every install shows.
const USER_GROWTH: [(&str, u32); 7] = [
    ("Mon", 40),
    ("Tue", 35),
    ("Wed", 55),
    ("Thu", 75),
    ("Fri", 65),
    ("Sat", 85),
    ("Sun", 95),
];

/// One slice of the storage-by-kind breakdown.
#[derive(Debug, Clone)]
pub struct StorageSlice {
    pub label: String,
    pub size: String,
    pub percent: u32,
}

/// Recent user row for the dashboard table.
#[derive(Debug, Clone)]
pub struct RecentUserView {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub status_class: &'static str,
    pub joined: String,
}

impl From<&User> for RecentUserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
            role: user.role.label().to_string(),
            status: user.status.label().to_string(),
            status_class: user_status_class(user.status),
            joined: user.joined.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Badge class for a user status.
pub(crate) const fn user_status_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge-active",
        UserStatus::Inactive => "badge-inactive",
        UserStatus::Pending => "badge-pending",
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub stats: DashboardStats,
    pub growth: Vec<GrowthPoint>,
    pub storage: Vec<StorageSlice>,
    pub recent_users: Vec<RecentUserView>,
}

/// Dashboard page handler.
///
/// GET /
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Html<String> {
    let users = state.users().snapshot();
    let files = state.files().snapshot();
    let workspaces = state.workspaces().snapshot();

    let active_workspaces = workspaces
        .iter()
        .filter(|w| w.status == WorkspaceStatus::Active)
        .count();
    let storage_used: u64 = workspaces.iter().map(|w| w.storage_used.as_u64()).sum();

    let stats = DashboardStats {
        total_users: users.len().to_string(),
        active_workspaces: active_workspaces.to_string(),
        total_files: files.len().to_string(),
        storage_used: ByteSize::new(storage_used).display(),
    };

    let max_users = USER_GROWTH.iter().map(|(_, n)| *n).max().unwrap_or(1);
    let growth = USER_GROWTH
        .iter()
        .map(|&(day, users)| GrowthPoint {
            day,
            users,
            percent: users * 100 / max_users.max(1),
        })
        .collect();

    let mut recent: Vec<&User> = users.iter().collect();
    recent.sort_by(|a, b| b.joined.cmp(&a.joined));
    let recent_users = recent.iter().take(5).map(|u| RecentUserView::from(*u)).collect();

    let template = DashboardTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/".to_string(),
        stats,
        growth,
        storage: storage_breakdown(&files),
        recent_users,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Aggregate stored bytes per file kind, largest share first.
fn storage_breakdown(files: &[FileRecord]) -> Vec<StorageSlice> {
    let total: u64 = files.iter().map(|f| f.size.as_u64()).sum();
    if total == 0 {
        return vec![];
    }

    let mut slices: Vec<StorageSlice> = FileKind::VALUES
        .iter()
        .filter_map(|kind| {
            let bytes: u64 = files
                .iter()
                .filter(|f| f.kind == *kind)
                .map(|f| f.size.as_u64())
                .sum();
            (bytes > 0).then(|| StorageSlice {
                label: kind.label().to_string(),
                size: ByteSize::new(bytes).display(),
                percent: u32::try_from(bytes * 100 / total).unwrap_or(0),
            })
        })
        .collect();

    slices.sort_by(|a, b| b.percent.cmp(&a.percent));
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_storage_breakdown_shares_sum_to_whole() {
        let files = seed::files();
        let slices = storage_breakdown(&files);

        assert!(!slices.is_empty());
        // Largest share first; video dominates the seed collection.
        assert_eq!(slices[0].label, "Video");
        let total: u32 = slices.iter().map(|s| s.percent).sum();
        assert!(total <= 100);
    }

    #[test]
    fn test_storage_breakdown_empty_collection() {
        assert!(storage_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_growth_series_is_normalized() {
        let max = USER_GROWTH.iter().map(|(_, n)| *n).max().unwrap_or(0);
        assert_eq!(max, 95);
    }
}
