//! Registration, login, and password reset against the site's auth
//! service, built the way the site binary builds it.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use lexiops_site::config::SiteConfig;
use lexiops_site::services::auth::{AuthError, AuthService};
use lexiops_site::state::AppState;

const PASSWORD: &str = "Correct1!";

fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("kD93jf02mqLz81bnWc64TyuQ5hgR7vXe"),
    }
}

#[test]
fn register_login_and_reset_through_app_state() {
    let state = AppState::new(test_config());

    let account = state
        .auth()
        .register("Jane Smith", "jane@example.com", PASSWORD, PASSWORD)
        .unwrap();
    assert_eq!(account.name, "Jane Smith");

    // Login works with the right password only.
    assert!(state.auth().login("jane@example.com", PASSWORD).is_ok());
    assert!(matches!(
        state.auth().login("jane@example.com", "Wrong1!a"),
        Err(AuthError::InvalidCredentials)
    ));

    // Full reset round trip through a token.
    let token = state
        .auth()
        .request_password_reset("jane@example.com")
        .unwrap();
    state
        .auth()
        .reset_password(&token, "Updated2@", "Updated2@")
        .unwrap();
    assert!(state.auth().login("jane@example.com", PASSWORD).is_err());
    assert!(state.auth().login("jane@example.com", "Updated2@").is_ok());
}

#[test]
fn duplicate_registration_is_rejected() {
    let service = AuthService::new();
    service
        .register("Jane", "jane@example.com", PASSWORD, PASSWORD)
        .unwrap();

    let err = service
        .register("Other Jane", "Jane@Example.com", PASSWORD, PASSWORD)
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
    assert_eq!(service.directory().len(), 1);
}

#[test]
fn weak_passwords_fail_with_one_message_per_rule() {
    let service = AuthService::new();

    // "short" is too short and lacks uppercase, digit, and special char.
    let err = service
        .register("Jane", "jane@example.com", "short", "short")
        .unwrap_err();
    let AuthError::WeakPassword(issues) = err else {
        panic!("expected WeakPassword, got {err:?}");
    };
    assert_eq!(issues.len(), 4);
    assert!(issues.iter().any(|m| m.contains("at least 6 characters")));
    assert!(issues.iter().any(|m| m.contains("uppercase")));
    assert!(issues.iter().any(|m| m.contains("number")));
    assert!(issues.iter().any(|m| m.contains("special character")));

    // Nothing was registered.
    assert!(service.directory().is_empty());
}

#[test]
fn malformed_emails_never_reach_the_directory() {
    let service = AuthService::new();
    for bad in ["", "no-at-symbol", "@example.com", "user@"] {
        let err = service.register("Jane", bad, PASSWORD, PASSWORD).unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)), "email: {bad:?}");
    }
    assert!(service.directory().is_empty());
}

#[test]
fn reset_tokens_are_single_use_and_email_bound() {
    let service = AuthService::new();
    service
        .register("Jane", "jane@example.com", PASSWORD, PASSWORD)
        .unwrap();

    // Unknown email: no token, same outward behavior.
    assert!(service.request_password_reset("ghost@example.com").is_none());

    let token = service.request_password_reset("jane@example.com").unwrap();

    // A bogus token is rejected without consuming the real one.
    assert!(matches!(
        service.reset_password("bogus", "Updated2@", "Updated2@"),
        Err(AuthError::InvalidToken)
    ));
    service
        .reset_password(&token, "Updated2@", "Updated2@")
        .unwrap();

    // Second use fails.
    assert!(matches!(
        service.reset_password(&token, "Third3#x", "Third3#x"),
        Err(AuthError::InvalidToken)
    ));
}
