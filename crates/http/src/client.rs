//! Client types that enforce authentication requirements at compile time.

use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

use crate::error::ClientError;

const USER_AGENT: &str = "cabinconnect-web/0.1.0";

/// Client for public endpoints that don't require authentication.
#[derive(Clone)]
pub struct PublicCabinClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer access token.
#[derive(Clone)]
pub struct AuthenticatedCabinClient {
    client: Client,
    base_url: String,
    access_token: String,
}

fn build_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout; // Timeouts not supported on WASM
        Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
    }
}

impl PublicCabinClient {
    /// Create a new public client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and deserialize the JSON response body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a bearer token to get an authenticated client.
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedCabinClient {
        AuthenticatedCabinClient {
            client: self.client,
            base_url: self.base_url,
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedCabinClient {
    /// Create a new authenticated client.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, access_token, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer token.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and deserialize the JSON response body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Execute a request where only the status matters (e.g. DELETE).
    pub async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        tracing::debug!(%status, "request rejected by server");
        Err(ClientError::from_status(status, message))
    }
}

/// Builder that creates the appropriate client type.
pub struct CabinClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CabinClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client.
    pub fn build_public(self) -> Result<PublicCabinClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicCabinClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client.
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedCabinClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        AuthenticatedCabinClient::new_with_timeout(base_url, access_token, self.timeout)
    }
}

impl Default for CabinClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
