//! User management routes: list, create, update, delete.

use std::collections::HashMap;

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::listview::{self, FilterSet, Pager};
use lexiops_core::{Email, UserId, UserRole, UserStatus};

use crate::{
    components::{data_table::users_table_config, table_view::TableView, table_view},
    filters,
    middleware::auth::RequireAdminAuth,
    models::User,
    routes::{dashboard::AdminUserView, params},
    state::AppState,
};

/// Query parameters for the users list.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Free-text search over name and email.
    pub q: Option<String>,
    /// Role facet.
    pub role: Option<String>,
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

/// User row for the list table.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub status_class: &'static str,
    pub joined: String,
    /// Date in form-input format for the inline edit form.
    pub joined_input: String,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.clone(),
            email: user.email.to_string(),
            role: user.role.label().to_string(),
            status: user.status.label().to_string(),
            status_class: super::dashboard::user_status_class(user.status),
            joined: user.joined.format("%b %-d, %Y").to_string(),
            joined_input: user.joined.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Users list template.
#[derive(Template)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub table: TableView,
    pub rows: Vec<UserRowView>,
    pub roles: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub error: Option<String>,
}

/// Users list page handler.
///
/// GET /users
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Html<String> {
    let config = users_table_config();
    let records = state.users().snapshot();

    let filter = FilterSet::new()
        .query(query.q.as_deref().unwrap_or(""))
        .facet("role", query.role.as_deref().unwrap_or("All"))
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

    let rows = output.rows.iter().map(|u| UserRowView::from(*u)).collect();

    let mut preserved = Vec::new();
    params::push_param(&mut preserved, "q", query.q.as_deref());
    params::push_param(&mut preserved, "role", query.role.as_deref());
    params::push_param(&mut preserved, "status", query.status.as_deref());
    let preserve = params::join_params(preserved);

    let mut filter_values = HashMap::new();
    if let Some(role) = &query.role {
        filter_values.insert("role".to_string(), role.clone());
    }
    if let Some(status) = &query.status {
        filter_values.insert("status".to_string(), status.clone());
    }

    let table = table_view::build_table_view(
        &config,
        "/users",
        query.q.as_deref(),
        &filter_values,
        sort.as_ref(),
        &output,
        &preserve,
    );

    let template = UsersIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/users".to_string(),
        table,
        rows,
        roles: UserRole::VALUES.iter().map(|r| r.label()).collect(),
        statuses: UserStatus::VALUES.iter().map(|s| s.label()).collect(),
        error: query.error.map(|code| error_message(&code)),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Create/update form data.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    /// Join date (`YYYY-MM-DD`); defaults to today when absent.
    pub joined: Option<String>,
}

/// Parsed and validated form fields.
struct ParsedUserForm {
    name: String,
    email: Email,
    role: UserRole,
    status: UserStatus,
    joined: chrono::NaiveDate,
}

fn parse_user_form(form: &UserForm) -> Result<ParsedUserForm, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("name");
    }
    let email = Email::parse(form.email.trim()).map_err(|_| "email")?;
    let role = form.role.parse::<UserRole>().map_err(|_| "role")?;
    let status = form.status.parse::<UserStatus>().map_err(|_| "status")?;
    let joined = match form.joined.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse().map_err(|_| "joined")?,
        None => chrono::Utc::now().date_naive(),
    };

    Ok(ParsedUserForm {
        name: name.to_string(),
        email,
        role,
        status,
        joined,
    })
}

/// Create a user.
///
/// POST /users
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Response {
    let parsed = match parse_user_form(&form) {
        Ok(parsed) => parsed,
        Err(field) => return Redirect::to(&format!("/users?error=invalid_{field}")).into_response(),
    };

    let user = User {
        id: state.users().next_id(),
        name: parsed.name,
        email: parsed.email,
        role: parsed.role,
        status: parsed.status,
        joined: parsed.joined,
    };

    if let Err(e) = state.users().insert(user) {
        tracing::error!("Failed to create user: {e}");
        return Redirect::to("/users?error=conflict").into_response();
    }

    tracing::info!(admin = %admin.email, "Created user");
    Redirect::to("/users").into_response()
}

/// Update a user in place.
///
/// POST /users/{id}
#[instrument(skip(admin, state, form))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UserForm>,
) -> Response {
    let parsed = match parse_user_form(&form) {
        Ok(parsed) => parsed,
        Err(field) => return Redirect::to(&format!("/users?error=invalid_{field}")).into_response(),
    };

    let user = User {
        id: UserId::new(id),
        name: parsed.name,
        email: parsed.email,
        role: parsed.role,
        status: parsed.status,
        joined: parsed.joined,
    };

    if let Err(e) = state.users().replace(user) {
        tracing::warn!(id, "Failed to update user: {e}");
        return Redirect::to("/users?error=not_found").into_response();
    }

    tracing::info!(admin = %admin.email, id, "Updated user");
    Redirect::to("/users").into_response()
}

/// Delete a user.
///
/// POST /users/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    if let Err(e) = state.users().remove(UserId::new(id)) {
        tracing::warn!(id, "Failed to delete user: {e}");
        return Redirect::to("/users?error=not_found").into_response();
    }
    tracing::info!(admin = %admin.email, id, "Deleted user");
    Redirect::to("/users").into_response()
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "invalid_email" => "Enter a valid email address.".to_string(),
        "invalid_name" => "Name cannot be empty.".to_string(),
        "invalid_joined" => "Enter the join date as YYYY-MM-DD.".to_string(),
        "not_found" => "That user no longer exists.".to_string(),
        "conflict" => "Could not create the user. Try again.".to_string(),
        _ => "Invalid input. Check the form and try again.".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(email: &str) -> UserForm {
        UserForm {
            name: "Jane Smith".to_string(),
            email: email.to_string(),
            role: "User".to_string(),
            status: "Active".to_string(),
            joined: Some("2024-02-10".to_string()),
        }
    }

    #[test]
    fn test_parse_user_form() {
        let parsed = parse_user_form(&form("jane@example.com")).unwrap();
        assert_eq!(parsed.name, "Jane Smith");
        assert_eq!(parsed.role, UserRole::User);
        assert_eq!(parsed.joined.to_string(), "2024-02-10");
    }

    #[test]
    fn test_parse_user_form_rejects_bad_fields() {
        assert_eq!(parse_user_form(&form("not-an-email")).unwrap_err(), "email");

        let mut bad_role = form("jane@example.com");
        bad_role.role = "Owner".to_string();
        assert_eq!(parse_user_form(&bad_role).unwrap_err(), "role");

        let mut empty_name = form("jane@example.com");
        empty_name.name = "  ".to_string();
        assert_eq!(parse_user_form(&empty_name).unwrap_err(), "name");
    }
}
