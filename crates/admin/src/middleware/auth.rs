//! Auth extractors for the admin panel.
//!
//! Every panel page takes one of these extractors instead of checking the
//! session by hand: [`RequireAdminAuth`] for any signed-in admin,
//! [`RequireSuperAdmin`] for plan and access-control mutations.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{AdminRole, CurrentAdmin, session_keys};

/// Why an auth extractor refused the request.
pub enum AuthRejection {
    /// Not signed in; send the browser to the login page.
    RedirectToLogin,
    /// No session layer was installed on the router.
    NoSession,
    /// Signed in, but the role is not allowed to do this.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::NoSession => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only super admins can access this resource",
            )
                .into_response(),
        }
    }
}

/// Read the signed-in admin out of the request's session.
async fn admin_from_parts(parts: &Parts) -> Result<CurrentAdmin, AuthRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::NoSession)?;

    session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
        .ok_or(AuthRejection::RedirectToLogin)
}

/// Extractor requiring a signed-in admin.
///
/// ```rust,ignore
/// async fn page(RequireAdminAuth(admin): RequireAdminAuth) -> Html<String> {
///     // admin is the session's CurrentAdmin
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        admin_from_parts(parts).await.map(Self)
    }
}

/// Extractor requiring the super-admin role.
///
/// Anonymous requests redirect to login; signed-in admins without the
/// role get 403.
pub struct RequireSuperAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireSuperAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = admin_from_parts(parts).await?;
        if admin.role == AdminRole::SuperAdmin {
            Ok(Self(admin))
        } else {
            Err(AuthRejection::Forbidden)
        }
    }
}

/// Record the signed-in admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Drop the signed-in admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
