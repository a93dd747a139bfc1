//! Session and token lifecycle for the CabinConnect frontend.
//!
//! The backend issues a short-lived access token and a longer-lived refresh
//! token. This crate owns the persisted session record, the pure expiry
//! decision, and the manager that silently exchanges the refresh token for a
//! new pair when the access token has lapsed. Storage, HTTP, and the clock
//! are injected so the whole lifecycle is testable without a browser.

pub mod clock;
pub mod error;
pub mod manager;
pub mod refresh;
pub mod session;
pub mod store;

pub use clock::Clock;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use error::AuthError;
pub use manager::{SessionManager, TokenIssue};
pub use refresh::{TokenGrant, TokenRefresher};
pub use session::{Session, SessionStatus};
pub use store::{MemorySessionStore, SessionStore};
