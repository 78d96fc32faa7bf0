//! In-memory account directory and password-reset tokens.
//!
//! The product has no user database; registered accounts and outstanding
//! reset tokens live here for the process lifetime. The directory is the
//! only place password hashes are stored.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use lexiops_core::{AccountId, Email};

use crate::models::Account;

/// How long a reset token stays valid.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Errors from directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// An account with the same email already exists.
    #[error("email is already registered")]
    EmailTaken,

    /// No account matches the given email.
    #[error("account not found")]
    NotFound,

    /// The reset token is unknown, used, or expired.
    #[error("invalid or expired reset token")]
    InvalidToken,
}

/// An outstanding password-reset token.
#[derive(Debug, Clone)]
struct ResetToken {
    email: Email,
    expires_at: DateTime<Utc>,
}

/// The in-memory account directory.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: RwLock<Vec<Account>>,
    reset_tokens: RwLock<HashMap<String, ResetToken>>,
}

impl AccountDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Look up an account by email (case-insensitive).
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.read()
            .iter()
            .find(|a| a.email.as_str().eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::EmailTaken` if the email is already
    /// registered.
    pub fn register(
        &self,
        name: String,
        email: Email,
        password_hash: String,
    ) -> Result<Account, DirectoryError> {
        let mut accounts = self.write();
        if accounts
            .iter()
            .any(|a| a.email.as_str().eq_ignore_ascii_case(email.as_str()))
        {
            return Err(DirectoryError::EmailTaken);
        }

        let id = accounts.iter().map(|a| a.id.as_i32()).max().unwrap_or(0) + 1;
        let account = Account {
            id: AccountId::new(id),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    /// Replace the password hash of the account with `email`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no account has the email.
    pub fn set_password_hash(
        &self,
        email: &Email,
        password_hash: String,
    ) -> Result<(), DirectoryError> {
        let mut accounts = self.write();
        let account = accounts
            .iter_mut()
            .find(|a| a.email == *email)
            .ok_or(DirectoryError::NotFound)?;
        account.password_hash = password_hash;
        Ok(())
    }

    /// Issue a reset token for `email`.
    ///
    /// The caller supplies the token value so token generation stays with
    /// the auth service. Tokens expire after an hour and are single-use.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no account has the email.
    pub fn issue_reset_token(&self, email: &str, token: String) -> Result<(), DirectoryError> {
        let account = self.find_by_email(email).ok_or(DirectoryError::NotFound)?;
        self.write_tokens().insert(
            token,
            ResetToken {
                email: account.email,
                expires_at: Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS),
            },
        );
        Ok(())
    }

    /// Consume a reset token, returning the email it was issued for.
    ///
    /// The token is removed whether or not it is still valid, so a token
    /// can never be redeemed twice.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidToken` if the token is unknown or
    /// expired.
    pub fn consume_reset_token(&self, token: &str) -> Result<Email, DirectoryError> {
        let entry = self
            .write_tokens()
            .remove(token)
            .ok_or(DirectoryError::InvalidToken)?;
        if entry.expires_at < Utc::now() {
            return Err(DirectoryError::InvalidToken);
        }
        Ok(entry.email)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Account>> {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tokens(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ResetToken>> {
        self.reset_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let directory = AccountDirectory::new();
        let a = directory
            .register("A".to_string(), email("a@example.com"), "hash".to_string())
            .unwrap();
        let b = directory
            .register("B".to_string(), email("b@example.com"), "hash".to_string())
            .unwrap();
        assert_eq!(a.id.as_i32(), 1);
        assert_eq!(b.id.as_i32(), 2);
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let directory = AccountDirectory::new();
        directory
            .register("A".to_string(), email("a@example.com"), "hash".to_string())
            .unwrap();
        let err = directory
            .register("B".to_string(), email("A@EXAMPLE.COM"), "hash".to_string())
            .unwrap_err();
        assert!(matches!(err, DirectoryError::EmailTaken));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_find_by_email_is_case_insensitive() {
        let directory = AccountDirectory::new();
        directory
            .register("A".to_string(), email("a@example.com"), "hash".to_string())
            .unwrap();
        assert!(directory.find_by_email("A@Example.Com").is_some());
        assert!(directory.find_by_email("missing@example.com").is_none());
    }

    #[test]
    fn test_reset_token_is_single_use() {
        let directory = AccountDirectory::new();
        directory
            .register("A".to_string(), email("a@example.com"), "hash".to_string())
            .unwrap();
        directory
            .issue_reset_token("a@example.com", "tok-1".to_string())
            .unwrap();

        let consumed = directory.consume_reset_token("tok-1").unwrap();
        assert_eq!(consumed.as_str(), "a@example.com");

        // A second redemption fails.
        assert!(matches!(
            directory.consume_reset_token("tok-1"),
            Err(DirectoryError::InvalidToken)
        ));
    }

    #[test]
    fn test_reset_token_unknown_email() {
        let directory = AccountDirectory::new();
        assert!(matches!(
            directory.issue_reset_token("ghost@example.com", "tok".to_string()),
            Err(DirectoryError::NotFound)
        ));
    }
}
