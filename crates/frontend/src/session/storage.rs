//! localStorage-backed session persistence.

use cabin_core::{Session, SessionStore};
use web_sys::Storage;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";
const USER_ID_KEY: &str = "userId";
const TOKEN_EXPIRATION_KEY: &str = "tokenExpiration";
const REFRESH_TOKEN_EXPIRATION_KEY: &str = "refreshTokenExpiration";

/// Persists the session in the browser's localStorage under one key per
/// field. A record with any field missing or unparsable loads as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

fn parse_expiry(raw: &str) -> Option<i64> {
    // Stored as stringified floats (ms since epoch); older records may carry
    // a fractional part.
    raw.trim().parse::<f64>().ok().map(|ms| ms as i64)
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = self.storage()?;
        let get = |key: &str| storage.get_item(key).ok().flatten();

        let access_token = get(ACCESS_TOKEN_KEY)?;
        let refresh_token = get(REFRESH_TOKEN_KEY)?;
        let user_id = get(USER_ID_KEY)?;
        let access_expires_at = parse_expiry(&get(TOKEN_EXPIRATION_KEY)?)?;
        let refresh_expires_at = parse_expiry(&get(REFRESH_TOKEN_EXPIRATION_KEY)?)?;

        Some(Session {
            access_token,
            refresh_token,
            user_id,
            access_expires_at,
            refresh_expires_at,
        })
    }

    fn store(&self, session: &Session) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &session.access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &session.refresh_token);
            let _ = storage.set_item(USER_ID_KEY, &session.user_id);
            let _ = storage.set_item(TOKEN_EXPIRATION_KEY, &session.access_expires_at.to_string());
            let _ = storage.set_item(
                REFRESH_TOKEN_EXPIRATION_KEY,
                &session.refresh_expires_at.to_string(),
            );
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
            let _ = storage.remove_item(TOKEN_EXPIRATION_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_EXPIRATION_KEY);
        }
    }
}
