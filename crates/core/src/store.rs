use std::sync::Mutex;

use crate::session::Session;

/// Where sessions are persisted.
///
/// Implementations must treat the session as a unit: a partially readable
/// record (missing or unparsable fields) loads as `None`, and `store`/`clear`
/// write or remove every field together.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn store(&self, session: &Session);
    fn clear(&self);
}

/// In-memory store for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().expect("session store lock").clone()
    }

    fn store(&self, session: &Session) {
        *self.inner.lock().expect("session store lock") = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.lock().expect("session store lock") = None;
    }
}
