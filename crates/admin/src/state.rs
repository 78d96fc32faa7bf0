//! Application state shared across handlers.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use secrecy::ExposeSecret;

use lexiops_core::{AdminRole, AdminUserId, Email};

use crate::config::AdminConfig;
use crate::models::{AdminAccount, FileRecord, Plan, User, Workspace};
use crate::models::{ActionDef, Role};
use crate::store::{PermissionGrants, RecordStore, seed};

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid bootstrap admin email: {0}")]
    BootstrapEmail(#[from] lexiops_core::EmailError),
    #[error("failed to hash bootstrap admin password")]
    PasswordHash,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the seeded record stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    admins: RecordStore<AdminAccount>,
    users: RecordStore<User>,
    files: RecordStore<FileRecord>,
    workspaces: RecordStore<Workspace>,
    plans: RecordStore<Plan>,
    roles: RecordStore<Role>,
    actions: RecordStore<ActionDef>,
    permissions: PermissionGrants,
}

impl AppState {
    /// Create the application state: seed every collection and register the
    /// bootstrap super-admin from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the bootstrap admin email is invalid or the
    /// password cannot be hashed.
    pub fn new(config: AdminConfig) -> Result<Self, StateError> {
        let bootstrap = bootstrap_admin(&config)?;
        tracing::info!(email = %bootstrap.email, "Seeded bootstrap super-admin");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                admins: RecordStore::with_records(vec![bootstrap]),
                users: RecordStore::with_records(seed::users()),
                files: RecordStore::with_records(seed::files()),
                workspaces: RecordStore::with_records(seed::workspaces()),
                plans: RecordStore::with_records(seed::plans()),
                roles: RecordStore::with_records(seed::roles()),
                actions: RecordStore::with_records(seed::actions()),
                permissions: PermissionGrants::with_grants(seed::permissions()),
                config,
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Admin accounts that can sign in to the panel.
    #[must_use]
    pub fn admins(&self) -> &RecordStore<AdminAccount> {
        &self.inner.admins
    }

    /// The managed user collection.
    #[must_use]
    pub fn users(&self) -> &RecordStore<User> {
        &self.inner.users
    }

    /// The stored file collection.
    #[must_use]
    pub fn files(&self) -> &RecordStore<FileRecord> {
        &self.inner.files
    }

    /// The workspace collection.
    #[must_use]
    pub fn workspaces(&self) -> &RecordStore<Workspace> {
        &self.inner.workspaces
    }

    /// The plan collection.
    #[must_use]
    pub fn plans(&self) -> &RecordStore<Plan> {
        &self.inner.plans
    }

    /// The RBAC role collection.
    #[must_use]
    pub fn roles(&self) -> &RecordStore<Role> {
        &self.inner.roles
    }

    /// The RBAC action collection.
    #[must_use]
    pub fn actions(&self) -> &RecordStore<ActionDef> {
        &self.inner.actions
    }

    /// The RBAC grant set.
    #[must_use]
    pub fn permissions(&self) -> &PermissionGrants {
        &self.inner.permissions
    }
}

/// Build the bootstrap super-admin account from the configuration.
fn bootstrap_admin(config: &AdminConfig) -> Result<AdminAccount, StateError> {
    let email = Email::parse(&config.bootstrap_email)?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(config.bootstrap_password.expose_secret().as_bytes(), &salt)
        .map_err(|_| StateError::PasswordHash)?
        .to_string();

    Ok(AdminAccount {
        id: AdminUserId::new(1),
        name: email.local_part().to_string(),
        email,
        role: AdminRole::SuperAdmin,
        password_hash,
        created_at: Utc::now(),
    })
}
