//! Workspace management routes: list, delete.

use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::listview::{self, FilterSet, Pager};
use lexiops_core::{ByteSize, WorkspaceId, WorkspaceStatus};

use crate::{
    components::{data_table::workspaces_table_config, table_view::TableView, table_view},
    filters,
    middleware::auth::RequireAdminAuth,
    models::Workspace,
    routes::{dashboard::AdminUserView, params},
    state::AppState,
};

/// Query parameters for the workspaces list.
#[derive(Debug, Default, Deserialize)]
pub struct WorkspacesQuery {
    /// Free-text search over the workspace name.
    pub q: Option<String>,
    /// Status facet.
    pub status: Option<String>,
    /// Sort column key.
    pub sort: Option<String>,
    /// Sort direction (asc/desc).
    pub dir: Option<String>,
    /// Requested page (1-based).
    pub page: Option<usize>,
    /// Error code carried through a redirect.
    pub error: Option<String>,
}

/// Workspace row for the list table.
#[derive(Debug, Clone)]
pub struct WorkspaceRowView {
    pub id: i32,
    pub name: String,
    pub members: u32,
    pub storage_used: String,
    pub storage_limit: String,
    pub storage_percent: u32,
    pub status: String,
    pub status_class: &'static str,
    pub last_activity: String,
}

impl From<&Workspace> for WorkspaceRowView {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id.as_i32(),
            name: workspace.name.clone(),
            members: workspace.members,
            storage_used: workspace.storage_used.display(),
            storage_limit: ByteSize::from_gb(u64::from(workspace.storage_limit_gb)).display(),
            storage_percent: workspace.storage_percent(),
            status: workspace.status.label().to_string(),
            status_class: match workspace.status {
                WorkspaceStatus::Active => "badge-active",
                WorkspaceStatus::Inactive => "badge-inactive",
            },
            last_activity: workspace.last_activity.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Workspaces list template.
#[derive(Template)]
#[template(path = "workspaces/index.html")]
pub struct WorkspacesIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub table: TableView,
    pub rows: Vec<WorkspaceRowView>,
    pub error: Option<String>,
}

/// Workspaces list page handler.
///
/// GET /workspaces
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<WorkspacesQuery>,
) -> Html<String> {
    let config = workspaces_table_config();
    let records = state.workspaces().snapshot();

    let filter = FilterSet::new()
        .query(query.q.as_deref().unwrap_or(""))
        .facet("status", query.status.as_deref().unwrap_or("All"));
    let sort = params::sort_from_params(&config, query.sort.as_deref(), query.dir.as_deref());

    let mut pager = Pager::new(config.page_size);
    let output = listview::run(
        &records,
        &filter,
        sort.as_ref(),
        &mut pager,
        query.page.unwrap_or(1),
    );

    let rows = output
        .rows
        .iter()
        .map(|w| WorkspaceRowView::from(*w))
        .collect();

    let mut preserved = Vec::new();
    params::push_param(&mut preserved, "q", query.q.as_deref());
    params::push_param(&mut preserved, "status", query.status.as_deref());
    let preserve = params::join_params(preserved);

    let mut filter_values = HashMap::new();
    if let Some(status) = &query.status {
        filter_values.insert("status".to_string(), status.clone());
    }

    let table = table_view::build_table_view(
        &config,
        "/workspaces",
        query.q.as_deref(),
        &filter_values,
        sort.as_ref(),
        &output,
        &preserve,
    );

    let template = WorkspacesIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/workspaces".to_string(),
        table,
        rows,
        error: query.error.map(|code| error_message(&code)),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Delete a workspace.
///
/// POST /workspaces/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    match state.workspaces().remove(WorkspaceId::new(id)) {
        Ok(workspace) => {
            tracing::info!(admin = %admin.email, workspace = %workspace.name, "Deleted workspace");
            Redirect::to("/workspaces").into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Failed to delete workspace: {e}");
            Redirect::to("/workspaces?error=not_found").into_response()
        }
    }
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "not_found" => "That workspace no longer exists.".to_string(),
        _ => "Invalid input. Try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_row_view_formats_storage() {
        let workspaces = seed::workspaces();
        let row = WorkspaceRowView::from(&workspaces[0]);
        assert_eq!(row.name, "Design Team");
        assert_eq!(row.storage_used, "45.2 GB");
        assert_eq!(row.storage_limit, "100 GB");
        assert_eq!(row.storage_percent, 45);
    }
}
