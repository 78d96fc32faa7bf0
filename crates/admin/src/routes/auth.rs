//! Authentication route handlers for the admin panel.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Render the login page.
///
/// GET /auth/login
pub async fn login_page(Query(query): Query<MessageQuery>) -> Html<String> {
    let error = query.error.map(|code| error_message(&code));
    render(LoginTemplate { error })
}

/// Handle login form submission.
///
/// POST /auth/login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(account) = state
        .admins()
        .snapshot()
        .into_iter()
        .find(|a| a.email.as_str().eq_ignore_ascii_case(form.email.trim()))
    else {
        tracing::warn!("Login attempt for unknown admin");
        return Redirect::to("/auth/login?error=credentials").into_response();
    };

    if !verify_password(&form.password, &account.password_hash) {
        tracing::warn!(admin = %account.email, "Login attempt with wrong password");
        return Redirect::to("/auth/login?error=credentials").into_response();
    }

    let current = CurrentAdmin::from(&account);
    if let Err(e) = set_current_admin(&session, &current).await {
        tracing::error!("Failed to set session: {e}");
        return Redirect::to("/auth/login?error=session").into_response();
    }

    tracing::info!(admin = %current.email, "Admin logged in");
    Redirect::to("/").into_response()
}

/// Logout and clear the session.
///
/// POST /auth/logout
pub async fn logout(session: Session) -> impl IntoResponse {
    let _ = clear_current_admin(&session).await;
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }
    Redirect::to("/auth/login")
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "credentials" => "Invalid email or password.".to_string(),
        "session" => "Could not start a session. Please try again.".to_string(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

fn render<T: Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_password_roundtrip() {
        use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"hunter2!A", &salt)
            .expect("hash")
            .to_string();

        assert!(verify_password("hunter2!A", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("hunter2!A", "not-a-hash"));
    }

    #[test]
    fn test_error_messages_are_generic() {
        assert!(error_message("credentials").contains("Invalid"));
        assert!(!error_message("credentials").contains("email not found"));
    }
}
