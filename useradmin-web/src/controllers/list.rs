use super::controller::{ControllerEnv, InteractionController, Settlement};
use super::interaction::{DeleteTarget, DeleteUser, ListUsers};
use super::snapshot::ListSnapshot;
use super::status::InteractionStatus;
use crate::api::Gateway;
use shared::models::UserRecord;
use std::fmt;
use std::rc::Rc;
use tracing::info;

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// `window.confirm()`. Answers `false` when no window is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// The "all users" screen: the list fetch plus confirm-then-delete.
pub struct UserListScreen<G> {
    list: InteractionController<G, ListUsers>,
    removal: InteractionController<G, DeleteUser>,
    snapshot: ListSnapshot,
}

impl<G: Gateway> UserListScreen<G> {
    pub fn new(env: ControllerEnv<G>) -> Self {
        let snapshot = env.snapshot.clone();
        Self {
            list: InteractionController::new(env.clone(), ListUsers),
            removal: InteractionController::new(env, DeleteUser),
            snapshot,
        }
    }

    /// Show the cached list when it is still fresh, otherwise fetch it.
    pub async fn load(&self) -> Settlement {
        if let Some(users) = self.snapshot.current() {
            self.list.settle_with(users);
            return Settlement::settled();
        }
        self.list.submit(()).await
    }

    pub async fn refresh(&self) -> Settlement {
        self.list.submit(()).await
    }

    /// Delete `target` once the user confirms, then re-fetch the whole list.
    pub async fn delete(&self, target: DeleteTarget, confirm: &dyn Confirm) -> Settlement {
        if self.is_busy() {
            return Settlement::Busy;
        }
        if !confirm.confirm(&target.confirmation_prompt()) {
            info!(id = %target.id, "delete cancelled by user");
            return Settlement::Declined;
        }

        let settlement = self.removal.submit(target).await;
        if matches!(settlement, Settlement::Settled { .. }) && self.removal.status().is_succeeded() {
            self.list.submit(()).await;
        }
        settlement
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.list.output().unwrap_or_default()
    }

    pub fn list_status(&self) -> InteractionStatus {
        self.list.status()
    }

    pub fn delete_status(&self) -> InteractionStatus {
        self.removal.status()
    }

    pub fn is_busy(&self) -> bool {
        self.list.is_pending() || self.removal.is_pending()
    }

    pub fn subscribe(&self, listener: Rc<dyn Fn()>) {
        self.list.subscribe(Rc::clone(&listener));
        self.removal.subscribe(listener);
    }

    pub fn teardown(&self) {
        self.list.teardown();
        self.removal.teardown();
    }
}

impl<G> fmt::Debug for UserListScreen<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserListScreen")
            .field("list", &self.list)
            .field("removal", &self.removal)
            .finish_non_exhaustive()
    }
}
