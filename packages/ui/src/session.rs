//! Persisted admin session.
//!
//! The session holds the credential the admin entered at login. It lives in
//! `localStorage` in the browser and in process memory everywhere else.

use std::collections::HashMap;
use std::sync::Mutex;

use api::AdminToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key of the admin session.
pub const SESSION_KEY: &str = "candidate_tracker.admin_session";

/// A verified admin login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: AdminToken,
    pub started_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(token: AdminToken) -> Self {
        Self {
            token,
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Unavailable,

    #[error("session storage failed: {0}")]
    Storage(String),

    #[error("stored session is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// String key-value storage for the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Session storage backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage(&self) -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::Unavailable)?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?
            .ok_or(SessionError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

/// In-memory session storage for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage("memory store lock poisoned".to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

pub fn load_from(store: &dyn SessionStore) -> Result<Option<AdminSession>, SessionError> {
    match store.get(SESSION_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_to(store: &dyn SessionStore, session: &AdminSession) -> Result<(), SessionError> {
    store.set(SESSION_KEY, &serde_json::to_string(session)?)
}

pub fn clear_from(store: &dyn SessionStore) -> Result<(), SessionError> {
    store.remove(SESSION_KEY)
}

#[cfg(not(target_arch = "wasm32"))]
static NATIVE_STORE: std::sync::LazyLock<MemoryStore> =
    std::sync::LazyLock::new(MemoryStore::default);

fn with_store<R>(f: impl FnOnce(&dyn SessionStore) -> R) -> R {
    #[cfg(target_arch = "wasm32")]
    {
        f(&LocalStorageStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        f(&*NATIVE_STORE)
    }
}

/// The stored session, if any. A malformed entry is removed.
pub fn current_session() -> Option<AdminSession> {
    with_store(|store| match load_from(store) {
        Ok(session) => session,
        Err(SessionError::Malformed(err)) => {
            tracing::warn!("Discarding malformed admin session: {}", err);
            if let Err(err) = clear_from(store) {
                tracing::warn!("Failed to clear admin session: {}", err);
            }
            None
        }
        Err(err) => {
            tracing::warn!("Failed to read admin session: {}", err);
            None
        }
    })
}

/// Persist a verified credential.
pub fn start_session(token: AdminToken) -> Result<AdminSession, SessionError> {
    let session = AdminSession::new(token);
    with_store(|store| save_to(store, &session))?;
    tracing::info!("Admin session started");
    Ok(session)
}

pub fn end_session() {
    match with_store(clear_from) {
        Ok(()) => tracing::info!("Admin session ended"),
        Err(err) => tracing::warn!("Failed to clear admin session: {}", err),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn token() -> AdminToken {
        AdminToken::new("hr-admin-secret").unwrap()
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = MemoryStore::default();
        assert!(load_from(&store).unwrap().is_none());
    }

    #[test]
    fn saved_session_is_loaded_back() {
        let store = MemoryStore::default();
        let session = AdminSession::new(token());
        save_to(&store, &session).unwrap();

        assert_eq!(load_from(&store).unwrap(), Some(session));

        clear_from(&store).unwrap();
        assert!(load_from(&store).unwrap().is_none());
    }

    #[test]
    fn stored_value_is_the_credential_not_a_flag() {
        let store = MemoryStore::default();
        save_to(&store, &AdminSession::new(token())).unwrap();

        let raw = store.get(SESSION_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["token"], "hr-admin-secret");
    }

    #[test]
    fn legacy_boolean_flag_is_malformed() {
        let store = MemoryStore::default();
        store.set(SESSION_KEY, "true").unwrap();
        assert!(matches!(load_from(&store), Err(SessionError::Malformed(_))));
    }

    #[test]
    fn process_session_lifecycle() {
        end_session();
        assert!(current_session().is_none());

        let started = start_session(token()).unwrap();
        assert_eq!(current_session(), Some(started));

        end_session();
        assert!(current_session().is_none());
    }
}
