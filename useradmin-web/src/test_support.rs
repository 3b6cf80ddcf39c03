//! In-memory collaborators for exercising the coordinator and controllers
//! without a browser or a server.

use crate::api::{Gateway, GatewayError};
use crate::controllers::{ControllerEnv, ListSnapshot};
use crate::scheduling::Timer;
use crate::storage::{CredentialStore, StorageError, StoredCredentials};
use async_trait::async_trait;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use shared::models::{
    DeleteUserResponse, LoginRequest, LoginResponse, LogoutResponse, UserPayload, UserRecord,
    VerifyResponse,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

pub fn user(id: &str, name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        age: 30,
        occupation: "Engineer".to_string(),
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTimer;

impl Timer for InstantTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }
}

/// Never resolves; only cancellation ends the wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTimer;

impl Timer for NeverTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        future::pending().boxed_local()
    }
}

pub fn env(gateway: &Rc<FakeGateway>) -> ControllerEnv<FakeGateway> {
    env_with_timer(gateway, Rc::new(InstantTimer))
}

pub fn env_with_timer(gateway: &Rc<FakeGateway>, timer: Rc<dyn Timer>) -> ControllerEnv<FakeGateway> {
    ControllerEnv {
        gateway: Rc::clone(gateway),
        snapshot: ListSnapshot::default(),
        timer,
        redirect_delay: Duration::from_secs(2),
    }
}

/// A tiny stand-in for the user service.
#[derive(Debug, Default)]
pub struct FakeGateway {
    users: RefCell<Vec<UserRecord>>,
    next_id: Cell<u32>,
    accounts: RefCell<HashMap<String, String>>,
    sessions: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
    calls: RefCell<Vec<&'static str>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeGateway {
    /// Seeded with the demo accounts.
    pub fn new() -> Self {
        let gateway = Self::default();
        for (username, password) in [("admin", "admin123"), ("user", "password"), ("demo", "demo123")] {
            gateway
                .accounts
                .borrow_mut()
                .insert(username.to_string(), password.to_string());
        }
        gateway
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let gateway = Self::new();
        *gateway.users.borrow_mut() = users;
        gateway
    }

    pub fn go_offline(&self) {
        self.offline.set(true);
    }

    pub fn issue_session(&self, token: &str, username: &str) {
        self.sessions
            .borrow_mut()
            .insert(token.to_string(), username.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn stored_users(&self) -> Vec<UserRecord> {
        self.users.borrow().clone()
    }

    /// Make the next call wait until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.gate.borrow_mut() = Some(gate);
        release
    }

    async fn enter(&self, call: &'static str) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push(call);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.offline.get() {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found() -> GatewayError {
        GatewayError::Remote {
            status: 404,
            body: r#"{"detail":"User not found"}"#.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Gateway for FakeGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        self.enter("list_users").await?;
        Ok(self.users.borrow().clone())
    }

    async fn get_user(&self, id: &str) -> Result<UserRecord, GatewayError> {
        self.enter("get_user").await?;
        self.users
            .borrow()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, GatewayError> {
        self.enter("create_user").await?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let record = UserRecord {
            id: format!("user-{id}"),
            name: payload.name.clone(),
            email: payload.email.clone(),
            age: payload.age,
            occupation: payload.occupation.clone(),
        };
        self.users.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update_user(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<UserRecord, GatewayError> {
        self.enter("update_user").await?;
        let mut users = self.users.borrow_mut();
        let record = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(Self::not_found)?;
        record.name.clone_from(&payload.name);
        record.email.clone_from(&payload.email);
        record.age = payload.age;
        record.occupation.clone_from(&payload.occupation);
        Ok(record.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<DeleteUserResponse, GatewayError> {
        self.enter("delete_user").await?;
        let mut users = self.users.borrow_mut();
        let position = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(Self::not_found)?;
        let removed = users.remove(position);
        Ok(DeleteUserResponse {
            message: Some(format!("User {} deleted successfully", removed.name)),
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, GatewayError> {
        self.enter("login").await?;
        let accepted = self
            .accounts
            .borrow()
            .get(&request.username)
            .is_some_and(|password| *password == request.password);
        if !accepted {
            return Ok(LoginResponse {
                success: false,
                token: None,
                message: Some("Invalid username or password".to_string()),
            });
        }
        let token = format!("token-{}-{}", request.username, self.sessions.borrow().len());
        self.issue_session(&token, &request.username);
        Ok(LoginResponse {
            success: true,
            token: Some(token),
            message: Some("Login successful".to_string()),
        })
    }

    async fn logout(&self, token: &str) -> Result<LogoutResponse, GatewayError> {
        self.enter("logout").await?;
        self.sessions.borrow_mut().remove(token);
        Ok(LogoutResponse {
            message: Some("Logged out successfully".to_string()),
        })
    }

    async fn verify(&self, token: &str) -> Result<VerifyResponse, GatewayError> {
        self.enter("verify").await?;
        let username = self.sessions.borrow().get(token).cloned();
        Ok(VerifyResponse {
            valid: username.is_some(),
            username,
        })
    }
}

/// [`CredentialStore`] kept in memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
    username: RefCell<Option<String>>,
    refuse_writes: Cell<bool>,
}

impl MemoryCredentialStore {
    pub fn with_credentials(token: &str, username: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        *store.username.borrow_mut() = Some(username.to_string());
        store
    }

    pub fn refuse_writes(&self) {
        self.refuse_writes.set(true);
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn username(&self) -> Option<String> {
        self.username.borrow().clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        let token = self.token.borrow().clone()?;
        let username = self.username.borrow().clone().unwrap_or_default();
        Some(StoredCredentials { token, username })
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), StorageError> {
        if self.refuse_writes.get() {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        *self.token.borrow_mut() = Some(credentials.token.clone());
        *self.username.borrow_mut() = Some(credentials.username.clone());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.username.borrow_mut().take();
    }
}

/// Scripted confirmation answers, recording every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        let confirm = Self::default();
        confirm.answer.set(answer);
        confirm
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl crate::controllers::Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.get()
    }
}
