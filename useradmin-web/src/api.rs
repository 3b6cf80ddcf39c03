use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use shared::models::{
    DeleteUserResponse, ErrorResponse, LoginRequest, LoginResponse, LogoutResponse, UserPayload,
    UserRecord, VerifyResponse,
};
use thiserror::Error;
use tracing::debug;

/// Failure of a single remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a usable response: connection refused,
    /// aborted fetch, or a body that could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("remote error ({status}): {body}")]
    Remote { status: u16, body: String },
}

impl GatewayError {
    /// Whether the service reported that the addressed resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }

    /// The service-provided `detail` string, when the error body carries one.
    #[must_use]
    pub fn remote_message(&self) -> Option<String> {
        match self {
            Self::Remote { body, .. } => ErrorResponse::parse(body)
                .and_then(|error| error.message().map(ToOwned::to_owned)),
            Self::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Remote operations consumed by the session coordinator and the controllers.
///
/// Implementations translate calls into requests and nothing more: no retries,
/// no caching, no validation.
#[async_trait(?Send)]
pub trait Gateway {
    /// `GET /users/`
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: &str) -> Result<UserRecord, GatewayError>;

    /// `POST /users/`
    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, GatewayError>;

    /// `PUT /users/{id}`
    async fn update_user(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<UserRecord, GatewayError>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &str) -> Result<DeleteUserResponse, GatewayError>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, GatewayError>;

    /// `POST /auth/logout?token=...`
    async fn logout(&self, token: &str) -> Result<LogoutResponse, GatewayError>;

    /// `GET /auth/verify?token=...`
    async fn verify(&self, token: &str) -> Result<VerifyResponse, GatewayError>;
}

/// HTTP implementation of [`Gateway`] backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Create a gateway for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Root URL every request is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `users/{id}` with `id` pushed as one percent-encoded path segment.
    fn user_url(&self, id: &str) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.api_url("users/"))
            .map_err(|err| GatewayError::Transport(format!("invalid service URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| GatewayError::Transport("service URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "service rejected request");
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Transport(format!("invalid response body: {err}")))
    }

    /// Like [`Self::execute`], for endpoints whose body is optional.
    async fn acknowledge<T: DeserializeOwned + Default>(
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let url = self.api_url("users/");
        debug!(%url, "listing users");
        Self::execute(self.client.get(url)).await
    }

    async fn get_user(&self, id: &str) -> Result<UserRecord, GatewayError> {
        let url = self.user_url(id)?;
        debug!(%url, "fetching user");
        Self::execute(self.client.get(url)).await
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, GatewayError> {
        let url = self.api_url("users/");
        debug!(%url, "creating user");
        Self::execute(self.client.post(url).json(payload)).await
    }

    async fn update_user(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<UserRecord, GatewayError> {
        let url = self.user_url(id)?;
        debug!(%url, "replacing user");
        Self::execute(self.client.put(url).json(payload)).await
    }

    async fn delete_user(&self, id: &str) -> Result<DeleteUserResponse, GatewayError> {
        let url = self.user_url(id)?;
        debug!(%url, "deleting user");
        Self::acknowledge(self.client.delete(url)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, GatewayError> {
        let url = self.api_url("auth/login");
        debug!(%url, username = %request.username, "signing in");
        Self::execute(self.client.post(url).json(request)).await
    }

    async fn logout(&self, token: &str) -> Result<LogoutResponse, GatewayError> {
        let url = self.api_url("auth/logout");
        debug!(%url, "signing out");
        Self::acknowledge(self.client.post(url).query(&[("token", token)])).await
    }

    async fn verify(&self, token: &str) -> Result<VerifyResponse, GatewayError> {
        let url = self.api_url("auth/verify");
        debug!(%url, "verifying session");
        Self::execute(self.client.get(url).query(&[("token", token)])).await
    }
}
