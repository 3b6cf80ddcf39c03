use super::interaction::Interaction;
use super::snapshot::ListSnapshot;
use super::status::InteractionStatus;
use crate::api::Gateway;
use crate::scheduling::{ScheduledRedirect, Timer};
use futures::future::AbortHandle;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

/// Collaborators every controller needs.
pub struct ControllerEnv<G> {
    pub gateway: Rc<G>,
    pub snapshot: ListSnapshot,
    pub timer: Rc<dyn Timer>,
    pub redirect_delay: Duration,
}

impl<G> Clone for ControllerEnv<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            snapshot: self.snapshot.clone(),
            timer: Rc::clone(&self.timer),
            redirect_delay: self.redirect_delay,
        }
    }
}

impl<G> fmt::Debug for ControllerEnv<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerEnv")
            .field("snapshot", &self.snapshot)
            .field("redirect_delay", &self.redirect_delay)
            .finish_non_exhaustive()
    }
}

/// How a call to [`InteractionController::submit`] ended.
#[derive(Debug)]
pub enum Settlement {
    /// Status now reflects the outcome. A redirect is present when the
    /// interaction returns to the list after success.
    Settled { redirect: Option<ScheduledRedirect> },
    /// Another interaction was still pending; nothing happened.
    Busy,
    /// The user declined a confirmation; nothing was sent.
    Declined,
    /// The controller was torn down while the call was in flight.
    Discarded,
}

impl Settlement {
    pub fn settled() -> Self {
        Self::Settled { redirect: None }
    }

    /// The scheduled return to the list, if one was produced.
    pub fn into_redirect(self) -> Option<ScheduledRedirect> {
        match self {
            Self::Settled { redirect } => redirect,
            Self::Busy | Self::Declined | Self::Discarded => None,
        }
    }
}

/// The `idle -> pending -> {succeeded, failed}` state machine for one screen.
///
/// At most one call is in flight per controller: `submit` while pending is
/// refused with [`Settlement::Busy`]. After [`teardown`](Self::teardown) any
/// pending redirect is cancelled and late responses are dropped.
pub struct InteractionController<G, I: Interaction> {
    env: ControllerEnv<G>,
    interaction: I,
    status: RefCell<InteractionStatus>,
    output: RefCell<Option<I::Output>>,
    redirect: RefCell<Option<AbortHandle>>,
    torn_down: Cell<bool>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<G: Gateway, I: Interaction> InteractionController<G, I> {
    pub fn new(env: ControllerEnv<G>, interaction: I) -> Self {
        Self {
            env,
            interaction,
            status: RefCell::new(InteractionStatus::Idle),
            output: RefCell::new(None),
            redirect: RefCell::new(None),
            torn_down: Cell::new(false),
            listener: RefCell::new(None),
        }
    }

    pub fn status(&self) -> InteractionStatus {
        self.status.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.status.borrow().is_pending()
    }

    /// Result of the last successful call, cleared when a new call starts.
    pub fn output(&self) -> Option<I::Output> {
        self.output.borrow().clone()
    }

    /// Register a callback run after every status change.
    pub fn subscribe(&self, listener: Rc<dyn Fn()>) {
        *self.listener.borrow_mut() = Some(listener);
    }

    #[cfg(test)]
    pub fn has_pending_redirect(&self) -> bool {
        self.redirect.borrow().is_some()
    }

    pub fn cancel_redirect(&self) {
        if let Some(handle) = self.redirect.borrow_mut().take() {
            debug!("cancelling scheduled redirect");
            handle.abort();
        }
    }

    /// Back to idle, dropping any fetched output and pending redirect.
    /// Ignored while a call is in flight.
    pub fn reset(&self) {
        if self.is_pending() {
            debug!("reset ignored while a request is pending");
            return;
        }
        self.cancel_redirect();
        *self.output.borrow_mut() = None;
        self.transition(InteractionStatus::Idle);
    }

    /// Detach from the screen. Pending redirects are cancelled and results
    /// that arrive later are discarded.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.cancel_redirect();
        self.listener.borrow_mut().take();
    }

    /// Validate `input`, run the remote call and record the outcome.
    pub async fn submit(&self, input: I::Input) -> Settlement {
        if self.torn_down.get() {
            return Settlement::Discarded;
        }
        if self.is_pending() {
            debug!("submit ignored while a request is pending");
            return Settlement::Busy;
        }

        self.cancel_redirect();
        self.transition(InteractionStatus::Idle);

        let request = match self.interaction.validate(input) {
            Ok(request) => request,
            Err(err) => {
                debug!(%err, "input rejected before sending");
                self.transition(InteractionStatus::Failed(err.to_string()));
                return Settlement::settled();
            }
        };

        *self.output.borrow_mut() = None;
        self.transition(InteractionStatus::Pending);
        let result = self
            .interaction
            .perform(self.env.gateway.as_ref(), request)
            .await;

        if self.torn_down.get() {
            if let Ok(output) = &result {
                self.interaction.on_discarded(output, &self.env.snapshot);
            }
            debug!("controller torn down before the response arrived");
            return Settlement::Discarded;
        }

        match result {
            Ok(output) => {
                self.interaction.apply(&output, &self.env.snapshot);
                let message = self.interaction.success_message(&output);
                *self.output.borrow_mut() = Some(output);
                let redirect = self
                    .interaction
                    .returns_to_list()
                    .then(|| self.schedule_redirect());
                self.transition(InteractionStatus::Succeeded(message));
                Settlement::Settled { redirect }
            }
            Err(err) => {
                warn!(error = %err, "remote call failed");
                let message = self.interaction.failure_message(&err);
                self.transition(InteractionStatus::Failed(message));
                Settlement::settled()
            }
        }
    }

    /// Settle from data already at hand, without a remote call.
    pub(crate) fn settle_with(&self, output: I::Output) {
        *self.output.borrow_mut() = Some(output);
        self.transition(InteractionStatus::Succeeded(None));
    }

    fn schedule_redirect(&self) -> ScheduledRedirect {
        let (redirect, handle) =
            ScheduledRedirect::schedule(self.env.timer.as_ref(), self.env.redirect_delay);
        *self.redirect.borrow_mut() = Some(handle);
        redirect
    }

    fn transition(&self, next: InteractionStatus) {
        *self.status.borrow_mut() = next;
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

impl<G, I: Interaction> Drop for InteractionController<G, I> {
    fn drop(&mut self) {
        if let Some(handle) = self.redirect.get_mut().take() {
            handle.abort();
        }
    }
}

impl<G, I: Interaction + fmt::Debug> fmt::Debug for InteractionController<G, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("interaction", &self.interaction)
            .field("status", &self.status.borrow())
            .field("torn_down", &self.torn_down.get())
            .finish_non_exhaustive()
    }
}
