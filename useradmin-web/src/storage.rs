//! Persistence adapter for session credentials.
//!
//! The token and username live under two local-storage keys that are always
//! written and cleared together.

use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;
use tracing::warn;

pub const TOKEN_KEY: &str = "authToken";
pub const USERNAME_KEY: &str = "username";

/// Credentials that survive a page reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
}

/// Get/set/clear access to persisted credentials.
pub trait CredentialStore {
    /// Persisted credentials, or `None` when no token is stored.
    fn load(&self) -> Option<StoredCredentials>;

    /// Persist both keys. On failure nothing is left behind.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] when the backend refuses the write.
    fn save(&self, credentials: &StoredCredentials) -> Result<(), StorageError>;

    /// Remove both keys.
    fn clear(&self);
}

/// [`CredentialStore`] over the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        if token.is_empty() {
            return None;
        }
        let username: String = LocalStorage::get(USERNAME_KEY).unwrap_or_default();
        Some(StoredCredentials { token, username })
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), StorageError> {
        LocalStorage::set(TOKEN_KEY, &credentials.token)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        if let Err(err) = LocalStorage::set(USERNAME_KEY, &credentials.username) {
            warn!(error = %err, "failed to persist username; rolling back token");
            LocalStorage::delete(TOKEN_KEY);
            return Err(StorageError::Unavailable(err.to_string()));
        }
        Ok(())
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USERNAME_KEY);
    }
}
