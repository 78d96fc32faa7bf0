//! Authentication route handlers.
//!
//! Validation failures re-render the form with inline field errors; only
//! successful submissions redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lexiops_core::Email;

use crate::filters;
use crate::middleware::{CurrentUser, Theme, clear_current_account, set_current_account};
use crate::models::session_keys;
use crate::services::auth::{AuthError, validate_password};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Forgot password form data.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

/// Reset password form data.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for success display.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub reset: Option<String>,
}

/// Query parameters for the reset form.
#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    pub token: Option<String>,
}

// =============================================================================
// Inline Errors
// =============================================================================

/// Field-level errors rendered inline on the signup and reset forms.
#[derive(Debug, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Vec<String>,
    pub confirm: Option<String>,
    pub general: Option<String>,
}

impl FieldErrors {
    fn from_auth_error(error: &AuthError) -> Self {
        let mut errors = Self::default();
        match error {
            AuthError::EmptyName => errors.name = Some("Name is required".to_string()),
            AuthError::InvalidEmail(_) => {
                errors.email = Some("Invalid email address".to_string());
            }
            AuthError::EmailTaken => {
                errors.email = Some("This email is already registered".to_string());
            }
            AuthError::WeakPassword(issues) => errors.password = issues.clone(),
            AuthError::PasswordMismatch => {
                errors.confirm = Some("Passwords do not match".to_string());
            }
            other => errors.general = Some(other.to_string()),
        }
        errors
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub name_value: String,
    pub email_value: String,
    pub errors: FieldErrors,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub email_value: String,
    pub errors: FieldErrors,
    pub success: Option<String>,
}

/// Forgot password page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub email_value: String,
    pub errors: FieldErrors,
    pub success: Option<String>,
}

/// Reset password page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/reset_password.html")]
pub struct ResetPasswordTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub token: String,
    pub errors: FieldErrors,
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
///
/// GET /sign-up
pub async fn signup_page(theme: Theme, CurrentUser(user): CurrentUser) -> SignupTemplate {
    SignupTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        name_value: String::new(),
        email_value: String::new(),
        errors: FieldErrors::default(),
    }
}

/// Handle registration form submission.
///
/// POST /sign-up
#[instrument(skip(state, session, form))]
pub async fn signup(
    State(state): State<AppState>,
    theme: Theme,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Response {
    match state
        .auth()
        .register(&form.name, &form.email, &form.password, &form.password_confirm)
    {
        Ok(account) => {
            if let Err(e) = set_current_account(&session, &account).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/login").into_response();
            }
            Redirect::to("/chat").into_response()
        }
        Err(error) => SignupTemplate {
            theme: theme.as_str(),
            account_name: None,
            name_value: form.name,
            email_value: form.email,
            errors: FieldErrors::from_auth_error(&error),
        }
        .into_response(),
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// GET /login
pub async fn login_page(
    theme: Theme,
    CurrentUser(user): CurrentUser,
    Query(query): Query<LoginQuery>,
) -> LoginTemplate {
    let success = query
        .reset
        .map(|_| "Password updated. Sign in with your new password.".to_string());
    LoginTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        email_value: String::new(),
        errors: FieldErrors::default(),
        success,
    }
}

/// Handle login form submission.
///
/// The form enforces the same shape rules as registration before touching
/// credentials, so typos surface as field errors rather than a generic
/// failure.
///
/// POST /login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    theme: Theme,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut errors = FieldErrors::default();
    if Email::parse(form.email.trim()).is_err() {
        errors.email = Some("Invalid email address".to_string());
    }
    if let Err(AuthError::WeakPassword(issues)) = validate_password(&form.password) {
        errors.password = issues;
    }

    if errors.email.is_none() && errors.password.is_empty() {
        match state.auth().login(&form.email, &form.password) {
            Ok(account) => {
                if let Err(e) = set_current_account(&session, &account).await {
                    tracing::error!("Failed to set session: {e}");
                    errors.general = Some("Could not start a session. Try again.".to_string());
                } else {
                    return Redirect::to("/chat").into_response();
                }
            }
            Err(error) => {
                tracing::warn!("Login failed");
                errors.general = Some(error.to_string());
            }
        }
    }

    LoginTemplate {
        theme: theme.as_str(),
        account_name: None,
        email_value: form.email,
        errors,
        success: None,
    }
    .into_response()
}

// =============================================================================
// Password Reset Routes
// =============================================================================

/// Display the forgot password page.
///
/// GET /forgot-password
pub async fn forgot_password_page(
    theme: Theme,
    CurrentUser(user): CurrentUser,
) -> ForgotPasswordTemplate {
    ForgotPasswordTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        email_value: String::new(),
        errors: FieldErrors::default(),
        success: None,
    }
}

/// Handle forgot password form submission.
///
/// The same success message shows for registered and unknown emails, so
/// the form cannot be used to enumerate accounts. With no mail service,
/// the reset link goes to the server log.
///
/// POST /forgot-password
#[instrument(skip(state, form))]
pub async fn forgot_password(
    State(state): State<AppState>,
    theme: Theme,
    Form(form): Form<ForgotPasswordForm>,
) -> ForgotPasswordTemplate {
    if let Some(token) = state.auth().request_password_reset(&form.email) {
        let link = format!("{}/reset-password?token={token}", state.config().base_url);
        tracing::info!(%link, "Password reset link issued");
    }

    ForgotPasswordTemplate {
        theme: theme.as_str(),
        account_name: None,
        email_value: String::new(),
        errors: FieldErrors::default(),
        success: Some(
            "If that email is registered, a reset link has been sent.".to_string(),
        ),
    }
}

/// Display the reset password page.
///
/// GET /reset-password?token=...
pub async fn reset_password_page(
    theme: Theme,
    Query(query): Query<ResetQuery>,
) -> Response {
    match query.token {
        Some(token) => ResetPasswordTemplate {
            theme: theme.as_str(),
            account_name: None,
            token,
            errors: FieldErrors::default(),
        }
        .into_response(),
        None => Redirect::to("/forgot-password").into_response(),
    }
}

/// Handle reset password form submission.
///
/// POST /reset-password
#[instrument(skip(state, form))]
pub async fn reset_password(
    State(state): State<AppState>,
    theme: Theme,
    Form(form): Form<ResetPasswordForm>,
) -> Response {
    match state
        .auth()
        .reset_password(&form.token, &form.password, &form.password_confirm)
    {
        Ok(()) => Redirect::to("/login?reset=1").into_response(),
        Err(error) => ResetPasswordTemplate {
            theme: theme.as_str(),
            account_name: None,
            token: form.token,
            errors: FieldErrors::from_auth_error(&error),
        }
        .into_response(),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Tears down the session's chat transcript (aborting any pending reply)
/// before flushing the session itself.
///
/// POST /logout
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Response {
    if let Ok(Some(chat_key)) = session.get::<uuid::Uuid>(session_keys::CHAT_KEY).await {
        state.chat().teardown(chat_key);
    }

    if let Err(e) = clear_current_account(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_from_auth_error() {
        let errors = FieldErrors::from_auth_error(&AuthError::EmailTaken);
        assert!(errors.email.is_some());
        assert!(errors.password.is_empty());

        let errors = FieldErrors::from_auth_error(&AuthError::WeakPassword(vec![
            "Password must include a number".to_string(),
        ]));
        assert_eq!(errors.password.len(), 1);

        let errors = FieldErrors::from_auth_error(&AuthError::InvalidCredentials);
        assert!(errors.general.is_some());
    }
}
