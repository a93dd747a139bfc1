use async_trait::async_trait;

use crate::error::AuthError;

/// A fresh token pair as issued by the refresh endpoint.
///
/// Lifetimes are in seconds; the backend serializes them as numbers or
/// numeric strings, so the HTTP layer normalizes them to `f64` before they
/// reach this type.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    pub access_lifetime_secs: f64,
    pub refresh_lifetime_secs: f64,
}

/// Exchanges a refresh token for a new token pair.
///
/// One attempt per call: no retries, no backoff. `?Send` because the wasm
/// reqwest future is not `Send`.
#[async_trait(?Send)]
pub trait TokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, AuthError>;
}
