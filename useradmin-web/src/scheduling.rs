//! Cancellable deferred work.

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use std::fmt;
use std::time::Duration;

/// Source of delays. The browser implementation sits on `setTimeout`.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

/// Navigation back to the list, due once `delay` has elapsed.
///
/// The owning controller keeps the matching [`AbortHandle`]; aborting it makes
/// [`ScheduledRedirect::elapsed`] resolve to `false` immediately.
pub struct ScheduledRedirect {
    delay: Abortable<LocalBoxFuture<'static, ()>>,
}

impl ScheduledRedirect {
    pub(crate) fn schedule(timer: &dyn Timer, delay: Duration) -> (Self, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        let redirect = Self {
            delay: Abortable::new(timer.sleep(delay), registration),
        };
        (redirect, handle)
    }

    /// Wait for the delay. `true` means navigate now, `false` means the
    /// redirect was cancelled.
    pub async fn elapsed(self) -> bool {
        self.delay.await.is_ok()
    }
}

impl fmt::Debug for ScheduledRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledRedirect")
            .field("aborted", &self.delay.is_aborted())
            .finish()
    }
}
