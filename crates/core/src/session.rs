use serde::{Deserialize, Serialize};

/// A persisted authentication session.
///
/// Expiry instants are absolute milliseconds since the Unix epoch, computed
/// from the lifetimes the backend reports when the tokens are issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    /// When the access token stops being accepted (ms since epoch).
    pub access_expires_at: i64,
    /// When the refresh token stops being accepted (ms since epoch).
    pub refresh_expires_at: i64,
}

/// Outcome of the pure expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The access token is still valid; no network call is needed.
    Active,
    /// The access token has lapsed but the refresh token has not.
    RefreshRequired,
    /// Both tokens have lapsed; only a fresh login can recover.
    Expired,
}

impl Session {
    /// Classify this session at the given instant.
    ///
    /// An access token exactly at its expiry instant still counts as valid;
    /// a refresh token exactly at its expiry instant still counts as usable.
    pub fn status(&self, now_ms: i64) -> SessionStatus {
        if now_ms <= self.access_expires_at {
            SessionStatus::Active
        } else if now_ms > self.refresh_expires_at {
            SessionStatus::Expired
        } else {
            SessionStatus::RefreshRequired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(access_expires_at: i64, refresh_expires_at: i64) -> Session {
        Session {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            user_id: "7".into(),
            access_expires_at,
            refresh_expires_at,
        }
    }

    #[test]
    fn active_up_to_and_including_access_expiry() {
        let s = session(1_000, 10_000);
        assert_eq!(s.status(999), SessionStatus::Active);
        assert_eq!(s.status(1_000), SessionStatus::Active);
    }

    #[test]
    fn refresh_required_between_expiries() {
        let s = session(1_000, 10_000);
        assert_eq!(s.status(1_001), SessionStatus::RefreshRequired);
        assert_eq!(s.status(10_000), SessionStatus::RefreshRequired);
    }

    #[test]
    fn expired_past_refresh_expiry() {
        let s = session(1_000, 10_000);
        assert_eq!(s.status(10_001), SessionStatus::Expired);
    }
}
