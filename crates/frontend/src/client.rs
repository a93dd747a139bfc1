//! Client configuration and initialization.

use cabin_http::client::{AuthenticatedCabinClient, CabinClientBuilder, PublicCabinClient};
use cabin_http::error::ClientError;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use web_sys::window;

use crate::config::AppConfig;
use crate::session;

/// Global public client instance
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicCabinClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for backend API calls
fn backend_base_url() -> String {
    if !AppConfig::BACKEND_URL.is_empty() {
        return AppConfig::BACKEND_URL.to_string();
    }

    // Fall back to the window origin for same-host deployments
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    String::new()
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicCabinClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if client_lock.is_none() {
        let client = CabinClientBuilder::new()
            .base_url(backend_base_url())
            .build_public()?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Public client should be initialized")
            .clone())
    }
}

/// Build an authenticated client carrying the access token currently in the
/// session store. Built per call so a silently refreshed token is picked up.
/// Returns None when no session is stored.
pub fn create_authenticated_client() -> Result<Option<AuthenticatedCabinClient>, ClientError> {
    let Some(token) = session::access_token() else {
        return Ok(None);
    };

    let client = CabinClientBuilder::new()
        .base_url(backend_base_url())
        .build_authenticated(token)?;
    Ok(Some(client))
}
