//! Account registration, login, and password reset.
//!
//! Passwords are hashed with argon2 and checked against the in-memory
//! directory; there is no external identity provider. Reset tokens are
//! random, single-use, and expire after an hour.

pub mod error;

use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use lexiops_core::Email;

use crate::accounts::{AccountDirectory, DirectoryError};
use crate::models::CurrentAccount;

pub use error::AuthError;

/// Password rules from the product's signup schema.
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 20;

/// Registration, login, and reset over the account directory.
#[derive(Debug, Default)]
pub struct AuthService {
    directory: AccountDirectory,
}

impl AuthService {
    /// Create a service over an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The backing account directory.
    #[must_use]
    pub const fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Register an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad name, email, or password, or
    /// `AuthError::EmailTaken` when the email is already registered.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<CurrentAccount, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName);
        }
        let email = Email::parse(email.trim())?;
        validate_password(password)?;
        if password != password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let hash = hash_password(password)?;
        let account = self
            .directory
            .register(name.to_string(), email, hash)
            .map_err(|e| match e {
                DirectoryError::EmailTaken => AuthError::EmailTaken,
                _ => AuthError::Hash,
            })?;

        tracing::info!(email = %account.email, "Account registered");
        Ok(CurrentAccount::from(&account))
    }

    /// Check credentials and return the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password; the two cases are indistinguishable on purpose.
    pub fn login(&self, email: &str, password: &str) -> Result<CurrentAccount, AuthError> {
        let Some(account) = self.directory.find_by_email(email.trim()) else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(CurrentAccount::from(&account))
    }

    /// Issue a reset token for `email`, returning it for delivery.
    ///
    /// Returns `None` for an unknown email; callers show the same success
    /// message either way so the form cannot be used to enumerate emails.
    #[must_use]
    pub fn request_password_reset(&self, email: &str) -> Option<String> {
        let token = Uuid::new_v4().simple().to_string();
        match self
            .directory
            .issue_reset_token(email.trim(), token.clone())
        {
            Ok(()) => Some(token),
            Err(_) => None,
        }
    }

    /// Redeem a reset token and set the new password.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad password, or
    /// `AuthError::InvalidToken` when the token is unknown, used, or
    /// expired.
    pub fn reset_password(
        &self,
        token: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<(), AuthError> {
        validate_password(password)?;
        if password != password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let email = self
            .directory
            .consume_reset_token(token)
            .map_err(|_| AuthError::InvalidToken)?;
        let hash = hash_password(password)?;
        self.directory
            .set_password_hash(&email, hash)
            .map_err(|_| AuthError::InvalidToken)?;

        tracing::info!(email = %email, "Password reset");
        Ok(())
    }
}

/// Check a password against the signup schema's rules.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` carrying one message per failed rule.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let mut issues = Vec::new();

    if password.chars().count() < PASSWORD_MIN {
        issues.push(format!("Password must be at least {PASSWORD_MIN} characters"));
    }
    if password.chars().count() > PASSWORD_MAX {
        issues.push(format!("Password must be at most {PASSWORD_MAX} characters"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push("Password must include a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push("Password must include an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push("Password must include a number".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        issues.push("Password must include a special character".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AuthError::WeakPassword(issues))
    }
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::Hash)
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GOOD_PASSWORD: &str = "Sunlit7!";

    #[test]
    fn test_validate_password_accepts_schema_match() {
        assert!(validate_password(GOOD_PASSWORD).is_ok());
    }

    #[test]
    fn test_validate_password_reports_every_failed_rule() {
        let Err(AuthError::WeakPassword(issues)) = validate_password("abc") else {
            panic!("expected weak password");
        };
        // Too short, no uppercase, no digit, no special character.
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn test_validate_password_length_bounds() {
        assert!(matches!(
            validate_password("Aa1!x"),
            Err(AuthError::WeakPassword(_))
        ));
        let long = format!("Aa1!{}", "x".repeat(20));
        assert!(matches!(
            validate_password(&long),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_register_then_login() {
        let service = AuthService::new();
        let registered = service
            .register("Jane", "jane@example.com", GOOD_PASSWORD, GOOD_PASSWORD)
            .unwrap();

        let logged_in = service.login("jane@example.com", GOOD_PASSWORD).unwrap();
        assert_eq!(logged_in, registered);

        assert!(matches!(
            service.login("jane@example.com", "Wrong1!x"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("ghost@example.com", GOOD_PASSWORD),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_rejects_mismatched_confirmation() {
        let service = AuthService::new();
        assert!(matches!(
            service.register("Jane", "jane@example.com", GOOD_PASSWORD, "Other1!x"),
            Err(AuthError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_reset_flow() {
        let service = AuthService::new();
        service
            .register("Jane", "jane@example.com", GOOD_PASSWORD, GOOD_PASSWORD)
            .unwrap();

        let token = service
            .request_password_reset("jane@example.com")
            .expect("token for known email");
        service
            .reset_password(&token, "Moonlit9?", "Moonlit9?")
            .unwrap();

        assert!(service.login("jane@example.com", GOOD_PASSWORD).is_err());
        assert!(service.login("jane@example.com", "Moonlit9?").is_ok());

        // The token cannot be redeemed twice.
        assert!(matches!(
            service.reset_password(&token, "Starlit3#", "Starlit3#"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_reset_request_for_unknown_email_yields_nothing() {
        let service = AuthService::new();
        assert!(service.request_password_reset("ghost@example.com").is_none());
    }
}
