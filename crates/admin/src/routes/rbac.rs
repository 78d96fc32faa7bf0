//! Access-control routes: tabbed roles/actions/permissions management.
//!
//! The permission matrix toggles one (role, action) grant per submit.
//! Mutations require the super-admin role.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::listview::FilterSet;
use lexiops_core::{ActionId, RoleId};

use crate::{
    filters,
    middleware::auth::{RequireAdminAuth, RequireSuperAdmin},
    models::{ActionDef, Role},
    routes::dashboard::AdminUserView,
    state::AppState,
};

/// Query parameters for the access-control page.
#[derive(Debug, Default, Deserialize)]
pub struct RbacQuery {
    /// Active tab (roles/actions/permissions).
    pub tab: Option<String>,
    /// Free-text search over the active tab's list.
    pub q: Option<String>,
    /// Error code carried through a redirect.
    pub error: Option<String>,
}

/// Role row view.
#[derive(Debug, Clone)]
pub struct RoleView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub grant_count: usize,
}

/// Action row view.
#[derive(Debug, Clone)]
pub struct ActionView {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// One row of the permission matrix.
#[derive(Debug, Clone)]
pub struct MatrixRow {
    pub role_id: i32,
    pub role_name: String,
    pub cells: Vec<MatrixCell>,
}

/// One cell of the permission matrix.
#[derive(Debug, Clone)]
pub struct MatrixCell {
    pub action_id: i32,
    pub granted: bool,
}

/// Access-control page template.
#[derive(Template)]
#[template(path = "rbac/index.html")]
pub struct RbacIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub tab: String,
    pub search_value: String,
    pub roles: Vec<RoleView>,
    pub actions: Vec<ActionView>,
    pub matrix_actions: Vec<ActionView>,
    pub matrix: Vec<MatrixRow>,
    pub error: Option<String>,
}

/// Access-control page handler.
///
/// GET /rbac
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<RbacQuery>,
) -> Html<String> {
    let tab = match query.tab.as_deref() {
        Some(tab @ ("actions" | "permissions")) => tab.to_string(),
        _ => "roles".to_string(),
    };
    let filter = FilterSet::new().query(query.q.as_deref().unwrap_or(""));

    let all_roles = state.roles().snapshot();
    let all_actions = state.actions().snapshot();

    // Search applies to the active tab's list only; the other lists render
    // in full so tab switches never look filtered.
    let roles_source: Vec<&Role> = if tab == "roles" {
        filter.apply(&all_roles)
    } else {
        all_roles.iter().collect()
    };
    let actions_source: Vec<&ActionDef> = if tab == "actions" {
        filter.apply(&all_actions)
    } else {
        all_actions.iter().collect()
    };

    let roles = roles_source
        .into_iter()
        .map(|role| RoleView {
            id: role.id.as_i32(),
            name: role.name.clone(),
            description: role.description.clone(),
            grant_count: state.permissions().count_for_role(role.id),
        })
        .collect();

    let actions: Vec<ActionView> = actions_source
        .into_iter()
        .map(|action| ActionView {
            id: action.id.as_i32(),
            name: action.name.clone(),
            description: action.description.clone(),
        })
        .collect();

    let matrix_actions: Vec<ActionView> = all_actions
        .iter()
        .map(|action| ActionView {
            id: action.id.as_i32(),
            name: action.name.clone(),
            description: action.description.clone(),
        })
        .collect();

    let matrix = all_roles
        .iter()
        .map(|role| MatrixRow {
            role_id: role.id.as_i32(),
            role_name: role.name.clone(),
            cells: all_actions
                .iter()
                .map(|action| MatrixCell {
                    action_id: action.id.as_i32(),
                    granted: state.permissions().has(role.id, action.id),
                })
                .collect(),
        })
        .collect();

    let template = RbacIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/rbac".to_string(),
        tab,
        search_value: query.q.unwrap_or_default(),
        roles,
        actions,
        matrix_actions,
        matrix,
        error: query.error.map(|code| error_message(&code)),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Role/action form data.
#[derive(Debug, Deserialize)]
pub struct NamedForm {
    pub name: String,
    pub description: String,
}

fn parse_named_form(form: &NamedForm) -> Result<(String, String), &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("name");
    }
    Ok((name.to_string(), form.description.trim().to_string()))
}

/// Create a role.
///
/// POST /rbac/roles
#[instrument(skip(admin, state, form))]
pub async fn create_role(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Form(form): Form<NamedForm>,
) -> Response {
    let Ok((name, description)) = parse_named_form(&form) else {
        return Redirect::to("/rbac?tab=roles&error=invalid_name").into_response();
    };

    let role = Role {
        id: state.roles().next_id(),
        name,
        description,
    };
    if let Err(e) = state.roles().insert(role) {
        tracing::error!("Failed to create role: {e}");
        return Redirect::to("/rbac?tab=roles&error=conflict").into_response();
    }

    tracing::info!(admin = %admin.email, "Created role");
    Redirect::to("/rbac?tab=roles").into_response()
}

/// Update a role in place.
///
/// POST /rbac/roles/{id}
#[instrument(skip(admin, state, form))]
pub async fn update_role(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NamedForm>,
) -> Response {
    let Ok((name, description)) = parse_named_form(&form) else {
        return Redirect::to("/rbac?tab=roles&error=invalid_name").into_response();
    };

    let role = Role {
        id: RoleId::new(id),
        name,
        description,
    };
    if let Err(e) = state.roles().replace(role) {
        tracing::warn!(id, "Failed to update role: {e}");
        return Redirect::to("/rbac?tab=roles&error=not_found").into_response();
    }

    tracing::info!(admin = %admin.email, id, "Updated role");
    Redirect::to("/rbac?tab=roles").into_response()
}

/// Delete a role and every grant that references it.
///
/// POST /rbac/roles/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete_role(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    let role_id = RoleId::new(id);
    match state.roles().remove(role_id) {
        Ok(role) => {
            state.permissions().remove_role(role_id);
            tracing::info!(admin = %admin.email, role = %role.name, "Deleted role");
            Redirect::to("/rbac?tab=roles").into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Failed to delete role: {e}");
            Redirect::to("/rbac?tab=roles&error=not_found").into_response()
        }
    }
}

/// Create an action.
///
/// POST /rbac/actions
#[instrument(skip(admin, state, form))]
pub async fn create_action(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Form(form): Form<NamedForm>,
) -> Response {
    let Ok((name, description)) = parse_named_form(&form) else {
        return Redirect::to("/rbac?tab=actions&error=invalid_name").into_response();
    };

    let action = ActionDef {
        id: state.actions().next_id(),
        name,
        description,
    };
    if let Err(e) = state.actions().insert(action) {
        tracing::error!("Failed to create action: {e}");
        return Redirect::to("/rbac?tab=actions&error=conflict").into_response();
    }

    tracing::info!(admin = %admin.email, "Created action");
    Redirect::to("/rbac?tab=actions").into_response()
}

/// Update an action in place.
///
/// POST /rbac/actions/{id}
#[instrument(skip(admin, state, form))]
pub async fn update_action(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NamedForm>,
) -> Response {
    let Ok((name, description)) = parse_named_form(&form) else {
        return Redirect::to("/rbac?tab=actions&error=invalid_name").into_response();
    };

    let action = ActionDef {
        id: ActionId::new(id),
        name,
        description,
    };
    if let Err(e) = state.actions().replace(action) {
        tracing::warn!(id, "Failed to update action: {e}");
        return Redirect::to("/rbac?tab=actions&error=not_found").into_response();
    }

    tracing::info!(admin = %admin.email, id, "Updated action");
    Redirect::to("/rbac?tab=actions").into_response()
}

/// Delete an action and every grant that references it.
///
/// POST /rbac/actions/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete_action(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    let action_id = ActionId::new(id);
    match state.actions().remove(action_id) {
        Ok(action) => {
            state.permissions().remove_action(action_id);
            tracing::info!(admin = %admin.email, action = %action.name, "Deleted action");
            Redirect::to("/rbac?tab=actions").into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Failed to delete action: {e}");
            Redirect::to("/rbac?tab=actions&error=not_found").into_response()
        }
    }
}

/// Toggle form data for the permission matrix.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub role_id: i32,
    pub action_id: i32,
}

/// Toggle one (role, action) grant.
///
/// POST /rbac/permissions/toggle
#[instrument(skip(admin, state))]
pub async fn toggle_permission(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> Response {
    let role_id = RoleId::new(form.role_id);
    let action_id = ActionId::new(form.action_id);

    // Reject toggles for records that no longer exist, so a stale matrix
    // cannot create orphan grants.
    if state.roles().get(role_id).is_none() || state.actions().get(action_id).is_none() {
        return Redirect::to("/rbac?tab=permissions&error=not_found").into_response();
    }

    let granted = state.permissions().toggle(role_id, action_id);
    tracing::info!(
        admin = %admin.email,
        role = form.role_id,
        action = form.action_id,
        granted,
        "Toggled permission"
    );
    Redirect::to("/rbac?tab=permissions").into_response()
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "invalid_name" => "Name cannot be empty.".to_string(),
        "not_found" => "That record no longer exists.".to_string(),
        "conflict" => "Could not save. Try again.".to_string(),
        _ => "Invalid input. Try again.".to_string(),
    }
}
