//! Auth service errors.

use thiserror::Error;

use lexiops_core::EmailError;

/// Errors from registration, login, and password reset.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The display name is missing.
    #[error("name cannot be empty")]
    EmptyName,

    /// The email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The email is already registered.
    #[error("email is already registered")]
    EmailTaken,

    /// The password failed one or more complexity rules.
    ///
    /// Carries one message per failed rule for inline display.
    #[error("password does not meet requirements")]
    WeakPassword(Vec<String>),

    /// The confirmation does not match the password.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Unknown email or wrong password.
    ///
    /// Deliberately not split so responses cannot be used to enumerate
    /// registered emails.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The reset token is unknown, used, or expired.
    #[error("invalid or expired reset link")]
    InvalidToken,

    /// Password hashing failed.
    #[error("failed to hash password")]
    Hash,
}
