use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;

use crate::errors::{CustomResult, Error};
use crate::modules::session::RaceSession;

/// # session store
/// independent race sessions keyed by id, shared between request handlers.
/// the engine itself has no locking, so all access goes through the mutex.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    sessions: HashMap<u64, RaceSession>,
}

impl SessionStore {
    pub fn new() -> SessionStore {
        SessionStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// store a session and return its id
    pub fn insert(&self, session: RaceSession) -> u64 {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.sessions.insert(id, session);

        info!(target: "session_store", "opened session {}", id);
        id
    }

    pub fn remove(&self, id: u64) -> CustomResult<RaceSession> {
        self.lock()
            .sessions
            .remove(&id)
            .ok_or(Error::SessionNotFoundError { id })
    }

    /// # use a session
    /// run `f` on the session with the given id while holding the lock
    pub fn with_session<T, F>(&self, id: u64, f: F) -> CustomResult<T>
    where
        F: FnOnce(&mut RaceSession) -> CustomResult<T>,
    {
        let mut inner = self.lock();
        let session = inner
            .sessions
            .get_mut(&id)
            .ok_or(Error::SessionNotFoundError { id })?;

        f(session)
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::new();
        let first = store.insert(RaceSession::new(4, 2).unwrap());
        let second = store.insert(RaceSession::new(6, 3).unwrap());
        assert_ne!(first, second);

        store
            .with_session(first, |session| session.record_place(0, 0, 1).map(|_| ()))
            .unwrap();

        let started = store
            .with_session(second, |session| Ok(session.identify_next_heat()))
            .unwrap();
        assert_eq!(started, Some(0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_sessions_error() {
        let store = SessionStore::new();
        let id = store.insert(RaceSession::new(2, 2).unwrap());

        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.with_session(id, |_| Ok(())),
            Err(Error::SessionNotFoundError { .. })
        ));
        assert!(store.remove(id).is_err());
    }
}
