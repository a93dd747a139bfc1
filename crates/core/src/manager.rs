use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::error::AuthError;
use crate::refresh::TokenRefresher;
use crate::session::{Session, SessionStatus};
use crate::store::SessionStore;

/// A freshly issued token pair plus the user it belongs to, as returned by
/// the login endpoint. Lifetimes are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIssue {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub access_lifetime_secs: f64,
    pub refresh_lifetime_secs: f64,
}

/// Owns the session lifecycle: persistence, expiry decisions, and silent
/// refresh. Store, refresher, and clock are injected.
pub struct SessionManager<S, R, C> {
    store: S,
    refresher: R,
    clock: C,
    // Serializes concurrent refreshes so at most one network call is in
    // flight; waiters re-check the store after acquiring the lock.
    refresh_lock: Mutex<()>,
}

impl<S, R, C> SessionManager<S, R, C>
where
    S: SessionStore,
    R: TokenRefresher,
    C: Clock,
{
    pub fn new(store: S, refresher: R, clock: C) -> Self {
        Self {
            store,
            refresher,
            clock,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Whether the user currently holds a usable access token, refreshing it
    /// silently if possible. Never errors and never leaves the store in a
    /// worse state than it found it.
    pub async fn is_authenticated(&self) -> bool {
        let Some(session) = self.store.load() else {
            return false;
        };
        match session.status(self.clock.now_ms()) {
            SessionStatus::Active => true,
            SessionStatus::Expired => false,
            SessionStatus::RefreshRequired => match self.refresh().await {
                Ok(()) => true,
                Err(err) => {
                    tracing::debug!("token refresh failed: {err}");
                    false
                }
            },
        }
    }

    /// Exchange the stored refresh token for a new pair and persist it.
    ///
    /// On any failure the store is left untouched. Concurrent callers share
    /// one network call: whoever acquires the lock after a successful refresh
    /// sees an active session and returns without contacting the server.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let _guard = self.refresh_lock.lock().await;

        let session = self.store.load().ok_or(AuthError::NoSession)?;
        match session.status(self.clock.now_ms()) {
            SessionStatus::Active => return Ok(()),
            SessionStatus::Expired => return Err(AuthError::SessionExpired),
            SessionStatus::RefreshRequired => {}
        }

        let grant = self.refresher.refresh(&session.refresh_token).await?;
        let now = self.clock.now_ms();
        self.store.store(&Session {
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            user_id: session.user_id,
            access_expires_at: now + (grant.access_lifetime_secs * 1000.0) as i64,
            refresh_expires_at: now + (grant.refresh_lifetime_secs * 1000.0) as i64,
        });
        tracing::debug!("session refreshed");
        Ok(())
    }

    /// Persist a session from a fresh login.
    pub fn login(&self, issue: TokenIssue) {
        let now = self.clock.now_ms();
        self.store.store(&Session {
            access_token: issue.access_token,
            refresh_token: issue.refresh_token,
            user_id: issue.user_id,
            access_expires_at: now + (issue.access_lifetime_secs * 1000.0) as i64,
            refresh_expires_at: now + (issue.refresh_lifetime_secs * 1000.0) as i64,
        });
    }

    /// Drop the stored session.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// The access token currently in the store, if any.
    pub fn access_token(&self) -> Option<String> {
        self.store.load().map(|s| s.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;

    use super::*;
    use crate::refresh::TokenGrant;
    use crate::store::MemorySessionStore;

    struct ManualClock {
        now: Cell<i64>,
    }

    impl ManualClock {
        fn at(now: i64) -> Self {
            Self { now: Cell::new(now) }
        }
    }

    impl Clock for &ManualClock {
        fn now_ms(&self) -> i64 {
            self.now.get()
        }
    }

    struct StubRefresher {
        calls: Cell<usize>,
        outcome: Result<TokenGrant, AuthError>,
        yield_first: bool,
    }

    impl StubRefresher {
        fn ok(grant: TokenGrant) -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Ok(grant),
                yield_first: false,
            }
        }

        fn err(err: AuthError) -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Err(err),
                yield_first: false,
            }
        }
    }

    #[async_trait(?Send)]
    impl TokenRefresher for &StubRefresher {
        async fn refresh(&self, _refresh_token: &str) -> Result<TokenGrant, AuthError> {
            self.calls.set(self.calls.get() + 1);
            if self.yield_first {
                tokio::task::yield_now().await;
            }
            self.outcome.clone()
        }
    }

    const NOW: i64 = 1_700_000_000_000;

    fn stored(access_expires_at: i64, refresh_expires_at: i64) -> MemorySessionStore {
        MemorySessionStore::with_session(Session {
            access_token: "A1".into(),
            refresh_token: "R1".into(),
            user_id: "7".into(),
            access_expires_at,
            refresh_expires_at,
        })
    }

    fn grant() -> TokenGrant {
        TokenGrant {
            access_token: "A2".into(),
            refresh_token: "R2".into(),
            access_lifetime_secs: 900.0,
            refresh_lifetime_secs: 604_800.0,
        }
    }

    #[tokio::test]
    async fn valid_access_token_short_circuits() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let manager =
            SessionManager::new(stored(NOW + 60_000, NOW + 600_000), &refresher, &clock);

        assert!(manager.is_authenticated().await);
        assert_eq!(refresher.calls.get(), 0);
    }

    #[tokio::test]
    async fn missing_session_fails_closed() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let manager = SessionManager::new(MemorySessionStore::new(), &refresher, &clock);

        assert!(!manager.is_authenticated().await);
        assert_eq!(refresher.calls.get(), 0);
    }

    #[tokio::test]
    async fn expired_refresh_token_fails_without_network() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let manager = SessionManager::new(stored(NOW - 60_000, NOW - 1), &refresher, &clock);

        assert!(!manager.is_authenticated().await);
        assert_eq!(refresher.calls.get(), 0);
    }

    #[tokio::test]
    async fn successful_refresh_renews_session() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let store = stored(NOW - 1_000, NOW + 60_000);
        let manager = SessionManager::new(store, &refresher, &clock);

        assert!(manager.is_authenticated().await);
        assert_eq!(refresher.calls.get(), 1);

        let session = manager.store.load().unwrap();
        assert_eq!(session.access_token, "A2");
        assert_eq!(session.refresh_token, "R2");
        assert_eq!(session.user_id, "7");
        assert_eq!(session.access_expires_at, NOW + 900_000);
        assert_eq!(session.refresh_expires_at, NOW + 604_800_000);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_store_untouched() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::err(AuthError::RefreshRejected {
            status: 401,
            message: "token not valid".into(),
        });
        let manager = SessionManager::new(stored(NOW - 1_000, NOW + 60_000), &refresher, &clock);

        assert!(!manager.is_authenticated().await);
        assert_eq!(refresher.calls.get(), 1);

        let session = manager.store.load().unwrap();
        assert_eq!(session.access_token, "A1");
        assert_eq!(session.refresh_token, "R1");
    }

    #[tokio::test]
    async fn repeated_checks_are_idempotent() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let manager = SessionManager::new(stored(NOW - 1_000, NOW + 60_000), &refresher, &clock);

        assert!(manager.is_authenticated().await);
        assert!(manager.is_authenticated().await);
        assert!(manager.is_authenticated().await);
        // Only the first check hits the network; the rest see an active token.
        assert_eq!(refresher.calls.get(), 1);
    }

    #[tokio::test]
    async fn concurrent_checks_share_one_refresh() {
        let clock = ManualClock::at(NOW);
        let mut refresher = StubRefresher::ok(grant());
        refresher.yield_first = true;
        let manager = SessionManager::new(stored(NOW - 1_000, NOW + 60_000), &refresher, &clock);

        let (a, b) = tokio::join!(manager.is_authenticated(), manager.is_authenticated());
        assert!(a);
        assert!(b);
        assert_eq!(refresher.calls.get(), 1);
    }

    #[tokio::test]
    async fn login_and_logout_round_trip() {
        let clock = ManualClock::at(NOW);
        let refresher = StubRefresher::ok(grant());
        let manager = SessionManager::new(MemorySessionStore::new(), &refresher, &clock);

        manager.login(TokenIssue {
            access_token: "A1".into(),
            refresh_token: "R1".into(),
            user_id: "7".into(),
            access_lifetime_secs: 900.0,
            refresh_lifetime_secs: 604_800.0,
        });
        assert_eq!(manager.access_token().as_deref(), Some("A1"));
        assert!(manager.is_authenticated().await);

        manager.logout();
        assert_eq!(manager.access_token(), None);
        assert!(!manager.is_authenticated().await);
    }
}
