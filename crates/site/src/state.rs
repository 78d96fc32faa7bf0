//! Application state shared across handlers.

use std::sync::Arc;

use crate::chat::ChatStore;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::services::auth::AuthService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the seeded content, the account directory, and the chat
/// transcripts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ContentStore,
    auth: AuthService,
    chat: ChatStore,
}

impl AppState {
    /// Create a new application state with seeded content.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                content: ContentStore::seeded(),
                auth: AuthService::new(),
                chat: ChatStore::new(),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// The marketing content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// The auth service over the account directory.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// The chat transcript store.
    #[must_use]
    pub fn chat(&self) -> &ChatStore {
        &self.inner.chat
    }
}
