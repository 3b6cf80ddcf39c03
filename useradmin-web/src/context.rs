//! Browser wiring for the session coordinator and the screen controllers.

use crate::api::HttpGateway;
use crate::config::FrontendConfig;
use crate::controllers::{BrowserConfirm, Confirm, ControllerEnv, ListSnapshot};
use crate::scheduling::BrowserTimer;
use crate::session::SessionCoordinator;
use crate::storage::BrowserCredentialStore;
use std::fmt;
use std::rc::Rc;
use tracing::info;

pub type BrowserCoordinator = SessionCoordinator<HttpGateway, BrowserCredentialStore>;

/// Everything the pages share, built once when the app mounts.
#[derive(Clone)]
pub struct AppContext {
    pub coordinator: Rc<BrowserCoordinator>,
    pub env: ControllerEnv<HttpGateway>,
    pub confirm: Rc<dyn Confirm>,
}

impl AppContext {
    pub fn browser(config: &FrontendConfig) -> Self {
        let gateway = Rc::new(HttpGateway::new(&config.api_base_url));
        info!(base_url = gateway.base_url(), "user service configured");
        let coordinator = Rc::new(SessionCoordinator::new(
            Rc::clone(&gateway),
            Rc::new(BrowserCredentialStore),
        ));
        let env = ControllerEnv {
            gateway,
            snapshot: ListSnapshot::default(),
            timer: Rc::new(BrowserTimer),
            redirect_delay: config.redirect_delay,
        };
        Self {
            coordinator,
            env,
            confirm: Rc::new(BrowserConfirm),
        }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.coordinator, &other.coordinator) && self.env.snapshot == other.env.snapshot
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("coordinator", &self.coordinator)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}
