//! Browser wiring for the session lifecycle.
//!
//! One process-wide [`SessionManager`] is shared through a thread-local so
//! concurrent page checks funnel into the same in-flight-refresh guard
//! (wasm is single-threaded, so a thread-local is effectively a global).

mod guard;
mod storage;

use std::rc::Rc;

use cabin_core::{Clock, SessionManager, TokenIssue};
use cabin_http::HttpTokenRefresher;

pub use guard::RequireAuth;
pub use storage::LocalSessionStore;

use crate::client::create_public_client;

/// Clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

pub type BrowserSessionManager =
    SessionManager<LocalSessionStore, HttpTokenRefresher, BrowserClock>;

thread_local! {
    static MANAGER: Rc<BrowserSessionManager> = Rc::new(SessionManager::new(
        LocalSessionStore::new(),
        HttpTokenRefresher::new(
            create_public_client().expect("Failed to build public client"),
        ),
        BrowserClock,
    ));
}

/// Get the shared session manager.
pub fn manager() -> Rc<BrowserSessionManager> {
    MANAGER.with(Rc::clone)
}

/// Whether the user holds a usable access token, refreshing silently if
/// needed. Never throws; any failure reads as "not authenticated".
pub async fn is_authenticated() -> bool {
    manager().is_authenticated().await
}

/// Persist a session from a fresh login.
pub fn login(issue: TokenIssue) {
    manager().login(issue);
}

/// Clear the stored session.
pub fn logout() {
    manager().logout();
}

/// The access token currently in the store, if any.
pub fn access_token() -> Option<String> {
    manager().access_token()
}
