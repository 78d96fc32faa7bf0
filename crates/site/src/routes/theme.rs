//! Theme toggle handler.

use axum::{
    http::header,
    response::{AppendHeaders, IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::middleware::Theme;

/// Form data for the theme toggle.
#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    /// Path to return to; defaults to the landing page.
    #[serde(default)]
    pub back: Option<String>,
}

/// Flip the theme cookie and return to the submitting page.
///
/// POST /theme
pub async fn toggle(theme: Theme, axum::Form(form): axum::Form<ToggleForm>) -> impl IntoResponse {
    let next = theme.toggled();
    let back = form
        .back
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    (
        AppendHeaders([(header::SET_COOKIE, next.set_cookie())]),
        Redirect::to(&back),
    )
}
