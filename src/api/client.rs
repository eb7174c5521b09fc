//! Planner REST API Client
//!
//! HTTP client for the Helium backend. Every call resolves to an explicit
//! `Result`; transport failures, timeouts, and backend errors are all distinct
//! [`ApiError`] variants.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    ForgotRequest, InfoResponse, LoginRequest, RefreshRequest, RegisterRequest, TokenPair,
    UserDetails,
};
use super::error::{ApiError, ApiResult};
use crate::environment::Endpoints;

/// Options for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            user_agent: format!("helium/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Operations the page flows need from the backend.
///
/// Implemented by [`PlannerClient`]; tests substitute their own.
#[async_trait]
pub trait PlannerApi: Send + Sync {
    async fn info(&self) -> ApiResult<InfoResponse>;
    async fn forgot(&self, email: &str) -> ApiResult<()>;
    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair>;
    async fn blacklist(&self, refresh: &str) -> ApiResult<()>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;
    async fn verify(&self, username: &str, code: &str, welcome_email: Option<&str>)
        -> ApiResult<()>;
}

/// Planner REST API client
#[derive(Clone)]
pub struct PlannerClient {
    client: Client,
    endpoints: Endpoints,
    access_token: Option<String>,
}

impl PlannerClient {
    /// Create a new client for the given endpoints
    pub fn new(endpoints: Endpoints, options: ClientOptions) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(options.request_timeout_ms))
            .user_agent(options.user_agent)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints,
            access_token: None,
        })
    }

    /// Authenticate subsequent requests with a bearer token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch site info, including the support URL
    pub async fn info(&self) -> ApiResult<InfoResponse> {
        // Site info is public; never send the bearer token with it
        let request = self.client.get(self.endpoints.api(super::INFO_PATH));
        self.send_json(request).await
    }

    /// Ask the backend to email a temporary password
    pub async fn forgot(&self, email: &str) -> ApiResult<()> {
        let request = self
            .client
            .put(self.endpoints.api(super::FORGOT_PATH))
            .json(&ForgotRequest {
                email: email.to_string(),
            });
        self.send_empty(request).await
    }

    /// Exchange credentials for a token pair
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair> {
        let request = self
            .client
            .post(self.endpoints.api(super::TOKEN_PATH))
            .json(request);
        self.send_json(request).await
    }

    /// Refresh an access token
    pub async fn refresh(&self, refresh: &str) -> ApiResult<TokenPair> {
        let request = self
            .client
            .post(self.endpoints.api(super::REFRESH_PATH))
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            });
        self.send_json(request).await
    }

    /// Revoke a refresh token (logout)
    pub async fn blacklist(&self, refresh: &str) -> ApiResult<()> {
        let request = self
            .authorized(self.client.post(self.endpoints.api(super::BLACKLIST_PATH)))
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            });
        self.send_empty(request).await
    }

    /// Create a new account
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let request = self
            .client
            .post(self.endpoints.api(super::REGISTER_PATH))
            .json(request);
        self.send_empty(request).await
    }

    /// Verify an email address with the emailed code
    pub async fn verify(
        &self,
        username: &str,
        code: &str,
        welcome_email: Option<&str>,
    ) -> ApiResult<()> {
        let path = super::verify_path(username, code, welcome_email);
        let request = self.client.get(self.endpoints.api(&path));
        self.send_empty(request).await
    }

    /// Fetch the authenticated user
    pub async fn user(&self) -> ApiResult<UserDetails> {
        let request = self.authorized(self.client.get(self.endpoints.api(super::USER_PATH)));
        self.send_json(request).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(map_transport)?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), error = %err, "API request failed");
            Err(err)
        }
    }

    async fn send_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await.map_err(map_transport)?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), error = %err, "API request failed");
            Err(err)
        }
    }
}

fn map_transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl PlannerApi for PlannerClient {
    async fn info(&self) -> ApiResult<InfoResponse> {
        PlannerClient::info(self).await
    }

    async fn forgot(&self, email: &str) -> ApiResult<()> {
        PlannerClient::forgot(self, email).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair> {
        PlannerClient::login(self, request).await
    }

    async fn blacklist(&self, refresh: &str) -> ApiResult<()> {
        PlannerClient::blacklist(self, refresh).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        PlannerClient::register(self, request).await
    }

    async fn verify(
        &self,
        username: &str,
        code: &str,
        welcome_email: Option<&str>,
    ) -> ApiResult<()> {
        PlannerClient::verify(self, username, code, welcome_email).await
    }
}
