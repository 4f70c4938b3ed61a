//! GitHub client implementation
//!
//! [`GitHubClient`] owns the HTTP client, the API root and the optional token.
//! Resource managers describe a call as an [`Endpoint`] and pick one of the
//! `send_*` helpers depending on how the API reports its result:
//!
//! - [`send_json`](GitHubClient::send_json): a JSON body on success
//! - [`send_optional`](GitHubClient::send_optional): a JSON body, or 404 meaning "absent"
//! - [`send_created`](GitHubClient::send_created): a body only when something was created
//! - [`send_status`](GitHubClient::send_status): the status code alone answers the question
//! - [`send_check`](GitHubClient::send_check): 204 means yes, 404 means no
//! - [`send_text`](GitHubClient::send_text): a raw (non-JSON) representation

use crate::auth::GitHubAuth;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::{API_VERSION, DEFAULT_API_URL, media};
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("gh-rest/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: Option<GitHubAuth>,
    base_url: String,
    user_agent: String,
}

/// Builder for clients that need a non-default API root, user agent or timeout
#[derive(Debug, Default)]
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl GitHubClientBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the token only when one is available
    pub fn token_opt(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// API root, e.g. `https://ghe.example.com/api/v3` for GitHub Enterprise
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GitHubClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let parsed =
            Url::parse(&base_url).with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "API base URL must use http or https: {}",
                base_url
            ));
        }

        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().context("Failed to build HTTP client")?;

        let auth = self
            .token
            .filter(|token| !token.trim().is_empty())
            .map(GitHubAuth::new);

        Ok(GitHubClient {
            client,
            auth,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

impl GitHubClient {
    /// Create a client for api.github.com with an optional token
    ///
    /// If no token is provided, the `GITHUB_TOKEN` environment variable is used.
    pub fn new(token: Option<String>) -> Self {
        let token = token
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty());
        Self {
            client: Client::new(),
            auth: token.map(GitHubAuth::new),
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build the HTTP request for an endpoint without sending it
    pub fn request(&self, endpoint: &Endpoint) -> Result<RequestBuilder> {
        let url = endpoint.url(&self.base_url)?;

        let mut request = self
            .client
            .request(endpoint.method().clone(), url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", endpoint.accept_header().unwrap_or(media::JSON))
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(auth) = &self.auth {
            request = request.header("Authorization", auth.get_auth_header());
        }

        if let Some(body) = endpoint.body() {
            request = request.json(body);
        }

        Ok(request)
    }

    async fn execute(&self, endpoint: &Endpoint) -> Result<Response> {
        let request = self.request(endpoint)?;
        debug!(method = %endpoint.method(), path = %endpoint.path(), "GitHub API request");

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} {} failed", endpoint.method(), endpoint.path()))?;

        debug!(status = %response.status(), path = %endpoint.path(), "GitHub API response");
        Ok(response)
    }

    async fn parse_body<T: DeserializeOwned>(endpoint: &Endpoint, response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse GitHub API response from {}", endpoint.path()))
    }

    /// Send and deserialize a successful JSON response
    ///
    /// # Errors
    /// Returns an [`ApiError`] for any non-2xx status, or a parse error when the
    /// body does not match `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let response = self.execute(endpoint).await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await.into());
        }
        Self::parse_body(endpoint, response).await
    }

    /// Like [`send_json`](Self::send_json), but a 404 yields `Ok(None)`
    pub async fn send_optional<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Option<T>> {
        let response = self.execute(endpoint).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::from_response(response).await.into());
        }
        Self::parse_body(endpoint, response).await.map(Some)
    }

    /// Deserialize the body only for 201 Created; any other 2xx yields `Ok(None)`
    pub async fn send_created<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Option<T>> {
        let response = self.execute(endpoint).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_response(response).await.into());
        }
        if status != StatusCode::CREATED {
            return Ok(None);
        }
        Self::parse_body(endpoint, response).await.map(Some)
    }

    /// Answer a yes/no call from the status code alone
    ///
    /// Returns `true` when the status is one of `expected`. Any other status is
    /// logged together with the response body and reported as `false`; only
    /// transport failures surface as errors.
    pub async fn send_status(&self, endpoint: &Endpoint, expected: &[u16]) -> Result<bool> {
        let response = self.execute(endpoint).await?;
        let status = response.status();
        if expected.contains(&status.as_u16()) {
            return Ok(true);
        }

        let error = ApiError::from_response(response).await;
        warn!(
            method = %endpoint.method(),
            path = %endpoint.path(),
            status = %error.status,
            "{}",
            error.message
        );
        Ok(false)
    }

    /// Answer a yes/no check endpoint
    ///
    /// 204 is `true` and 404 is the ordinary `false`, logged at `debug` only.
    /// Anything else is handled like an unexpected status in
    /// [`send_status`](Self::send_status).
    pub async fn send_check(&self, endpoint: &Endpoint) -> Result<bool> {
        let response = self.execute(endpoint).await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(true);
        }
        if status == StatusCode::NOT_FOUND {
            debug!(path = %endpoint.path(), "GitHub check answered no");
            return Ok(false);
        }

        let error = ApiError::from_response(response).await;
        warn!(
            method = %endpoint.method(),
            path = %endpoint.path(),
            status = %error.status,
            "{}",
            error.message
        );
        Ok(false)
    }

    /// Send and return the body as text, for raw media types
    pub async fn send_text(&self, endpoint: &Endpoint) -> Result<String> {
        let response = self.execute(endpoint).await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await.into());
        }
        Ok(response.text().await?)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
