//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Marketing
//! GET  /features               - Feature cards
//! GET  /pricing                - Pricing tiers
//! GET  /docs                   - Documentation & FAQ
//!
//! # Auth
//! GET  /sign-up                - Registration page
//! POST /sign-up                - Registration action
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /forgot-password        - Request a reset link
//! POST /forgot-password        - Issue a reset token
//! GET  /reset-password         - Reset form (?token=...)
//! POST /reset-password         - Apply the new password
//! POST /logout                 - Logout action
//!
//! # Chat
//! GET  /chat                   - Chat transcript
//! POST /chat/messages          - Send a message (schedules the reply)
//! POST /chat/clear             - Reset the transcript
//!
//! # Preferences
//! POST /theme                  - Toggle the theme cookie
//!
//! Anything else renders the not-found page.
//! ```

pub mod auth;
pub mod chat;
pub mod home;
pub mod pages;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route(
            "/forgot-password",
            get(auth::forgot_password_page).post(auth::forgot_password),
        )
        .route(
            "/reset-password",
            get(auth::reset_password_page).post(auth::reset_password),
        )
        .route("/logout", post(auth::logout))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", get(chat::index))
        .route("/chat/messages", post(chat::send_message))
        .route("/chat/clear", post(chat::clear))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/features", get(pages::features))
        .route("/pricing", get(pages::pricing))
        .route("/docs", get(pages::docs))
        .route("/theme", post(theme::toggle))
        .merge(auth_routes())
        .merge(chat_routes())
        .fallback(pages::not_found)
}
