use crate::session::Session;
use yewdux::Store;

/// Session facts the chrome needs, mirrored from the coordinator.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl From<&Session> for AppState {
    fn from(session: &Session) -> Self {
        Self {
            authenticated: session.authenticated,
            username: session
                .authenticated
                .then(|| session.username.clone())
                .filter(|name| !name.is_empty()),
        }
    }
}
