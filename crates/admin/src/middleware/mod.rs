//! Request middleware for the admin panel.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, RequireSuperAdmin, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
