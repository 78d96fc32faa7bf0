//! Request middleware for the site.

pub mod auth;
pub mod session;
pub mod theme;

pub use auth::{CurrentUser, clear_current_account, set_current_account};
pub use session::create_session_layer;
pub use theme::Theme;
