//! Per-screen request/response state machines.
//!
//! Every screen runs the same `idle -> pending -> {succeeded, failed}` cycle
//! through [`InteractionController`]; what differs per screen is captured by
//! an `Interaction`.

mod controller;
mod interaction;
mod list;
mod snapshot;
mod status;
pub mod validation;

pub use controller::{ControllerEnv, InteractionController};
pub use interaction::{CreateUser, DeleteTarget, LoadUser, LookupUser, UpdateUser};
pub use list::{BrowserConfirm, Confirm, UserListScreen};
pub use snapshot::ListSnapshot;
pub use status::InteractionStatus;
pub use validation::UserDraft;

#[cfg(test)]
pub use controller::Settlement;
#[cfg(test)]
pub use interaction::ListUsers;
