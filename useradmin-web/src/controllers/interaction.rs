use super::snapshot::ListSnapshot;
use super::validation::{UserDraft, ValidationError, validate_user_id};
use crate::api::{Gateway, GatewayError};
use async_trait::async_trait;
use shared::models::{UserPayload, UserRecord};

const FETCH_USERS_FAILED: &str = "Failed to fetch users";
const FETCH_USER_FAILED: &str = "Failed to fetch user details";
const USER_NOT_FOUND: &str = "User not found";
const CREATE_SUCCEEDED: &str = "User created successfully!";
const CREATE_FAILED: &str = "Failed to create user. Please try again.";
const UPDATE_SUCCEEDED: &str = "User updated successfully!";
const UPDATE_FAILED: &str = "Failed to update user. Please try again.";
const DELETE_FAILED: &str = "Failed to delete user";

/// One kind of remote interaction: its validation rule, the gateway call, the
/// messages it shows and the follow-up it triggers.
#[async_trait(?Send)]
pub trait Interaction {
    /// What the screen hands over, e.g. raw form fields.
    type Input;
    /// What survives validation and is sent.
    type Request;
    /// What a successful call yields.
    type Output: Clone;

    /// # Errors
    /// Returns a [`ValidationError`] when the input must not reach the network.
    fn validate(&self, input: Self::Input) -> Result<Self::Request, ValidationError>;

    async fn perform<G: Gateway>(
        &self,
        gateway: &G,
        request: Self::Request,
    ) -> Result<Self::Output, GatewayError>;

    fn success_message(&self, _output: &Self::Output) -> Option<String> {
        None
    }

    fn failure_message(&self, error: &GatewayError) -> String;

    /// Effect of a successful call on the shared list cache.
    fn apply(&self, _output: &Self::Output, _snapshot: &ListSnapshot) {}

    /// Effect on the list cache of a successful call whose screen is gone.
    /// Reads leave the cache alone; mutations still mark it stale.
    fn on_discarded(&self, _output: &Self::Output, _snapshot: &ListSnapshot) {}

    /// Whether success schedules the delayed return to the list.
    fn returns_to_list(&self) -> bool {
        false
    }
}

/// Fetch every record and replace the list cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsers;

#[async_trait(?Send)]
impl Interaction for ListUsers {
    type Input = ();
    type Request = ();
    type Output = Vec<UserRecord>;

    fn validate(&self, _input: ()) -> Result<(), ValidationError> {
        Ok(())
    }

    async fn perform<G: Gateway>(
        &self,
        gateway: &G,
        _request: (),
    ) -> Result<Vec<UserRecord>, GatewayError> {
        gateway.list_users().await
    }

    fn failure_message(&self, _error: &GatewayError) -> String {
        FETCH_USERS_FAILED.to_string()
    }

    fn apply(&self, users: &Vec<UserRecord>, snapshot: &ListSnapshot) {
        snapshot.replace(users.clone());
    }
}

/// Fetch one record by id to prefill the edit form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadUser;

#[async_trait(?Send)]
impl Interaction for LoadUser {
    type Input = String;
    type Request = String;
    type Output = UserRecord;

    fn validate(&self, id: String) -> Result<String, ValidationError> {
        Ok(id)
    }

    async fn perform<G: Gateway>(&self, gateway: &G, id: String) -> Result<UserRecord, GatewayError> {
        gateway.get_user(&id).await
    }

    fn failure_message(&self, _error: &GatewayError) -> String {
        FETCH_USER_FAILED.to_string()
    }
}

/// Look a record up by a typed-in id, telling "not found" apart from other
/// failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupUser;

#[async_trait(?Send)]
impl Interaction for LookupUser {
    type Input = String;
    type Request = String;
    type Output = UserRecord;

    fn validate(&self, raw: String) -> Result<String, ValidationError> {
        validate_user_id(&raw)
    }

    async fn perform<G: Gateway>(&self, gateway: &G, id: String) -> Result<UserRecord, GatewayError> {
        gateway.get_user(&id).await
    }

    fn failure_message(&self, error: &GatewayError) -> String {
        if error.is_not_found() {
            USER_NOT_FOUND.to_string()
        } else {
            FETCH_USER_FAILED.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateUser;

#[async_trait(?Send)]
impl Interaction for CreateUser {
    type Input = UserDraft;
    type Request = UserPayload;
    type Output = UserRecord;

    fn validate(&self, draft: UserDraft) -> Result<UserPayload, ValidationError> {
        draft.validate()
    }

    async fn perform<G: Gateway>(
        &self,
        gateway: &G,
        payload: UserPayload,
    ) -> Result<UserRecord, GatewayError> {
        gateway.create_user(&payload).await
    }

    fn success_message(&self, _created: &UserRecord) -> Option<String> {
        Some(CREATE_SUCCEEDED.to_string())
    }

    fn failure_message(&self, _error: &GatewayError) -> String {
        CREATE_FAILED.to_string()
    }

    fn apply(&self, _created: &UserRecord, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }

    fn on_discarded(&self, _created: &UserRecord, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }

    fn returns_to_list(&self) -> bool {
        true
    }
}

/// Replace the record `id` with the submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    id: String,
}

impl UpdateUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait(?Send)]
impl Interaction for UpdateUser {
    type Input = UserDraft;
    type Request = UserPayload;
    type Output = UserRecord;

    fn validate(&self, draft: UserDraft) -> Result<UserPayload, ValidationError> {
        draft.validate()
    }

    async fn perform<G: Gateway>(
        &self,
        gateway: &G,
        payload: UserPayload,
    ) -> Result<UserRecord, GatewayError> {
        gateway.update_user(&self.id, &payload).await
    }

    fn success_message(&self, _updated: &UserRecord) -> Option<String> {
        Some(UPDATE_SUCCEEDED.to_string())
    }

    fn failure_message(&self, _error: &GatewayError) -> String {
        UPDATE_FAILED.to_string()
    }

    fn apply(&self, _updated: &UserRecord, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }

    fn on_discarded(&self, _updated: &UserRecord, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }

    fn returns_to_list(&self) -> bool {
        true
    }
}

/// The record a delete acts on. The name is echoed in the confirmation
/// prompt and the success message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

impl DeleteTarget {
    pub fn confirmation_prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.name)
    }
}

impl From<&UserRecord> for DeleteTarget {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteUser;

#[async_trait(?Send)]
impl Interaction for DeleteUser {
    type Input = DeleteTarget;
    type Request = DeleteTarget;
    type Output = DeleteTarget;

    fn validate(&self, target: DeleteTarget) -> Result<DeleteTarget, ValidationError> {
        Ok(target)
    }

    async fn perform<G: Gateway>(
        &self,
        gateway: &G,
        target: DeleteTarget,
    ) -> Result<DeleteTarget, GatewayError> {
        gateway.delete_user(&target.id).await?;
        Ok(target)
    }

    fn success_message(&self, target: &DeleteTarget) -> Option<String> {
        Some(format!("User {} deleted successfully", target.name))
    }

    fn failure_message(&self, _error: &GatewayError) -> String {
        DELETE_FAILED.to_string()
    }

    fn apply(&self, _target: &DeleteTarget, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }

    fn on_discarded(&self, _target: &DeleteTarget, snapshot: &ListSnapshot) {
        snapshot.invalidate();
    }
}
