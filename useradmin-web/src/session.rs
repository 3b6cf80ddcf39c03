//! Session lifecycle: restore on startup, sign in, sign out.
//!
//! [`SessionCoordinator`] owns the single [`Session`] instance. Every mutation
//! goes through `initialize`, `login` or `logout`; everything else reads a
//! snapshot.

use crate::api::{Gateway, GatewayError};
use crate::storage::{CredentialStore, StoredCredentials};
use shared::models::LoginRequest;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tracing::{info, warn};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Authenticated identity derived from a server-issued token.
///
/// `authenticated` implies `token` is present and the server confirmed it at
/// startup or at login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: String,
    pub authenticated: bool,
}

impl Session {
    fn signed_in(token: String, username: String) -> Self {
        Self {
            token: Some(token),
            username,
            authenticated: true,
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }
}

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter a username and password")]
    MissingCredentials,

    /// The service declined; carries its message.
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("Login failed. Please try again.")]
    Transport,
}

pub struct SessionCoordinator<G, S> {
    gateway: Rc<G>,
    store: Rc<S>,
    session: RefCell<Session>,
}

impl<G: Gateway, S: CredentialStore> SessionCoordinator<G, S> {
    pub fn new(gateway: Rc<G>, store: Rc<S>) -> Self {
        Self {
            gateway,
            store,
            session: RefCell::new(Session::signed_out()),
        }
    }

    /// Current session state.
    #[cfg(test)]
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().authenticated
    }

    /// Restore a persisted session if the server still accepts its token.
    ///
    /// Never fails: every error path lands in the signed-out state with the
    /// persisted credentials cleared.
    pub async fn initialize(&self) -> Session {
        let Some(stored) = self.store.load() else {
            info!("no persisted session");
            return self.replace(Session::signed_out());
        };

        match self.gateway.verify(&stored.token).await {
            Ok(response) if response.valid => {
                let username = response
                    .username
                    .filter(|name| !name.is_empty())
                    .unwrap_or(stored.username);
                info!(%username, "restored persisted session");
                self.replace(Session::signed_in(stored.token, username))
            }
            Ok(_) => {
                info!("persisted session rejected by server");
                self.store.clear();
                self.replace(Session::signed_out())
            }
            Err(err) => {
                warn!(error = %err, "session verification failed; signing out");
                self.store.clear();
                self.replace(Session::signed_out())
            }
        }
    }

    /// Exchange credentials for a session token.
    ///
    /// # Errors
    /// [`LoginError::Rejected`] carries the server's message for refused
    /// credentials; [`LoginError::Transport`] means the service was
    /// unreachable. Neither touches persisted state.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, LoginError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = match self.gateway.login(&request).await {
            Ok(response) => response,
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "login request failed");
                return Err(LoginError::Transport);
            }
            Err(err) => {
                warn!(error = %err, "login rejected by service");
                let message = err.remote_message().unwrap_or_else(|| LOGIN_FAILED.to_string());
                return Err(LoginError::Rejected(message));
            }
        };

        if !response.success {
            let message = response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            info!(%username, "credentials rejected");
            return Err(LoginError::Rejected(message));
        }

        let Some(token) = response.token.filter(|token| !token.is_empty()) else {
            warn!("login succeeded without a token");
            return Err(LoginError::Rejected(LOGIN_FAILED.to_string()));
        };

        let credentials = StoredCredentials {
            token: token.clone(),
            username: username.to_string(),
        };
        if let Err(err) = self.store.save(&credentials) {
            warn!(error = %err, "session will not survive a reload");
        }
        info!(%username, "signed in");
        Ok(self.replace(Session::signed_in(token, username.to_string())))
    }

    /// Sign out locally, notifying the server on a best-effort basis.
    pub async fn logout(&self) -> Session {
        let token = self
            .session
            .borrow()
            .token
            .clone()
            .or_else(|| self.store.load().map(|stored| stored.token));

        if let Some(token) = token {
            if let Err(err) = self.gateway.logout(&token).await {
                warn!(error = %err, "remote logout failed; clearing local session anyway");
            }
        }

        self.store.clear();
        info!("signed out");
        self.replace(Session::signed_out())
    }

    fn replace(&self, next: Session) -> Session {
        *self.session.borrow_mut() = next.clone();
        next
    }
}

impl<G, S> fmt::Debug for SessionCoordinator<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session.borrow();
        f.debug_struct("SessionCoordinator")
            .field("username", &session.username)
            .field("authenticated", &session.authenticated)
            .finish_non_exhaustive()
    }
}
