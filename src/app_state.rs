//! Shared application state injected into all Axum handlers.

use std::fmt;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::AppConfig;
use crate::persistence::EntryStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Entry store for all persistence.
    pub store: EntryStore,
    /// Username of the single admin account.
    pub admin_username: Arc<str>,
    /// Password of the single admin account.
    pub admin_password: Arc<str>,
    /// Cookie-signing key derived from the configured session secret.
    key: Key,
}

impl AppState {
    /// Builds the application state from the store and loaded config.
    ///
    /// The signing key is derived from `session_secret`, whose minimum
    /// length is validated in [`AppConfig::from_env`].
    #[must_use]
    pub fn new(store: EntryStore, config: &AppConfig) -> Self {
        Self {
            store,
            admin_username: Arc::from(config.admin_username.as_str()),
            admin_password: Arc::from(config.admin_password.as_str()),
            key: Key::derive_from(config.session_secret.as_bytes()),
        }
    }
}

/// Lets `SignedCookieJar` pull its signing key straight from the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key and password stay out of debug output.
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("admin_username", &self.admin_username)
            .finish_non_exhaustive()
    }
}
