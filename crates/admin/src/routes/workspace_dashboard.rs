//! Single-workspace dashboard: selector, stat tiles, members, recent files.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::{ByteSize, WorkspaceId};

use crate::{
    error::AppError,
    filters,
    middleware::auth::RequireAdminAuth,
    models::Workspace,
    routes::dashboard::AdminUserView,
    state::AppState,
};

/// Query parameters for the workspace dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct WorkspaceDashboardQuery {
    /// Selected workspace; defaults to the first seeded workspace.
    pub id: Option<i32>,
}

/// Selector entry.
#[derive(Debug, Clone)]
pub struct WorkspaceOption {
    pub id: i32,
    pub name: String,
    pub selected: bool,
}

/// Stat tiles for the selected workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceStats {
    pub members: String,
    pub storage_used: String,
    pub storage_limit: String,
    pub storage_percent: u32,
    pub status: String,
    pub status_class: &'static str,
}

/// Member row, reusing the dashboard's recent-user shape.
pub use super::dashboard::RecentUserView as MemberView;

/// Recent file row.
#[derive(Debug, Clone)]
pub struct RecentFileView {
    pub name: String,
    pub kind: String,
    pub size: String,
    pub modified: String,
}

/// Workspace dashboard template.
#[derive(Template)]
#[template(path = "workspace_dashboard.html")]
pub struct WorkspaceDashboardTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub options: Vec<WorkspaceOption>,
    pub workspace_name: String,
    pub stats: WorkspaceStats,
    pub members: Vec<MemberView>,
    pub recent_files: Vec<RecentFileView>,
}

/// Workspace dashboard handler.
///
/// An explicit `?id=` naming a missing workspace is 404; with no id the
/// first seeded workspace is shown.
///
/// GET /workspace
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<WorkspaceDashboardQuery>,
) -> Result<Response, AppError> {
    let workspaces = state.workspaces().snapshot();
    let Some(first) = workspaces.first() else {
        // Every workspace was deleted; nothing to show.
        return Ok(Redirect::to("/workspaces").into_response());
    };

    let selected: &Workspace = match query.id {
        Some(id) => workspaces
            .iter()
            .find(|w| w.id == WorkspaceId::new(id))
            .ok_or_else(|| AppError::NotFound(format!("workspace {id}")))?,
        None => first,
    };

    let options = workspaces
        .iter()
        .map(|w| WorkspaceOption {
            id: w.id.as_i32(),
            name: w.name.clone(),
            selected: w.id == selected.id,
        })
        .collect();

    let stats = WorkspaceStats {
        members: selected.members.to_string(),
        storage_used: selected.storage_used.display(),
        storage_limit: ByteSize::from_gb(u64::from(selected.storage_limit_gb)).display(),
        storage_percent: selected.storage_percent(),
        status: selected.status.label().to_string(),
        status_class: match selected.status {
            lexiops_core::WorkspaceStatus::Active => "badge-active",
            lexiops_core::WorkspaceStatus::Inactive => "badge-inactive",
        },
    };

    // The demo data has no per-workspace membership; show the head of the
    // user directory as this workspace's member roster.
    let members = state
        .users()
        .snapshot()
        .iter()
        .take(4)
        .map(MemberView::from)
        .collect();

    let mut files = state.files().snapshot();
    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    let recent_files = files
        .iter()
        .take(3)
        .map(|f| RecentFileView {
            name: f.name.clone(),
            kind: f.kind.label().to_string(),
            size: f.size.display(),
            modified: f.modified.format("%b %-d, %Y").to_string(),
        })
        .collect();

    let template = WorkspaceDashboardTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/workspace".to_string(),
        options,
        workspace_name: selected.name.clone(),
        stats,
        members,
        recent_files,
    };

    let body = template
        .render()
        .map_err(|e| AppError::Internal(format!("template render error: {e}")))?;
    Ok(Html(body).into_response())
}
