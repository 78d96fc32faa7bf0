//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Dashboard overview
//! GET  /workspace              - Single-workspace dashboard
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//!
//! # Users
//! GET  /users                  - User list (search, facets, sort, pages)
//! POST /users                  - Create user
//! POST /users/:id              - Update user
//! POST /users/:id/delete       - Delete user
//!
//! # Files
//! GET  /files                  - File list (search, facets, ranges, sort, pages)
//! POST /files/:id/delete       - Delete file
//!
//! # Workspaces
//! GET  /workspaces             - Workspace list
//! POST /workspaces/:id/delete  - Delete workspace
//!
//! # Plans (mutations require super admin)
//! GET  /plans                  - Plan cards with search
//! POST /plans                  - Create plan
//! POST /plans/:id              - Update plan
//! POST /plans/:id/delete       - Delete plan
//!
//! # Access control (mutations require super admin)
//! GET  /rbac                   - Tabbed roles/actions/permissions
//! POST /rbac/roles             - Create role
//! POST /rbac/roles/:id         - Update role
//! POST /rbac/roles/:id/delete  - Delete role (and its grants)
//! POST /rbac/actions           - Create action
//! POST /rbac/actions/:id       - Update action
//! POST /rbac/actions/:id/delete - Delete action (and its grants)
//! POST /rbac/permissions/toggle - Toggle one (role, action) grant
//! ```

pub mod auth;
pub mod dashboard;
pub mod files;
pub mod params;
pub mod plans;
pub mod rbac;
pub mod users;
pub mod workspace_dashboard;
pub mod workspaces;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the user management routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/{id}", post(users::update))
        .route("/{id}/delete", post(users::delete))
}

/// Create the file management routes router.
pub fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(files::index))
        .route("/{id}/delete", post(files::delete))
}

/// Create the workspace management routes router.
pub fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(workspaces::index))
        .route("/{id}/delete", post(workspaces::delete))
}

/// Create the plan management routes router.
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::index).post(plans::create))
        .route("/{id}", post(plans::update))
        .route("/{id}/delete", post(plans::delete))
}

/// Create the access-control routes router.
pub fn rbac_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(rbac::index))
        .route("/roles", post(rbac::create_role))
        .route("/roles/{id}", post(rbac::update_role))
        .route("/roles/{id}/delete", post(rbac::delete_role))
        .route("/actions", post(rbac::create_action))
        .route("/actions/{id}", post(rbac::update_action))
        .route("/actions/{id}/delete", post(rbac::delete_action))
        .route("/permissions/toggle", post(rbac::toggle_permission))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/workspace", get(workspace_dashboard::index))
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/files", file_routes())
        .nest("/workspaces", workspace_routes())
        .nest("/plans", plan_routes())
        .nest("/rbac", rbac_routes())
}
