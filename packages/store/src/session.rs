//! # Session persistence over an abstract key-value store
//!
//! The client keeps two entries across page loads: the bearer token and a JSON
//! snapshot of the [`SessionIdentity`]. [`SessionStore`] owns the encoding and the
//! key names; the actual storage goes through the [`KeyValueStore`] trait so the same
//! logic runs against browser `localStorage` ([`crate::LocalStore`], web only) and
//! the in-memory [`crate::MemoryStore`] used by tests and native builds.
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | Raw bearer token string |
//! | `user` | `SessionIdentity` as JSON |
//!
//! A session is only considered present when **both** keys exist and the identity
//! decodes. A snapshot that no longer decodes (for example after a model change) is
//! treated as logged out and both keys are removed.

use serde::{Deserialize, Serialize};

use crate::models::{IdentityPatch, SessionIdentity};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// An authenticated session: the token plus the identity it belongs to.
///
/// This is also the shape of the login and register responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionIdentity,
}

/// Reads and writes the persisted [`Session`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session, clearing it if the identity snapshot is unreadable.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let raw_user = self.store.get(USER_KEY)?;
        match serde_json::from_str::<SessionIdentity>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(_) => {
                self.clear();
                None
            }
        }
    }

    /// Persist a session, replacing whatever was stored.
    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        self.save_user(&session.user);
    }

    /// Persist only the identity snapshot (after a patch).
    pub fn save_user(&self, user: &SessionIdentity) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    /// Apply a patch to the stored identity and return the result.
    pub fn patch_user(&self, patch: IdentityPatch) -> Option<SessionIdentity> {
        let mut session = self.load()?;
        session.user.apply(patch);
        self.save_user(&session.user);
        Some(session.user)
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: serde_json::from_str(r#"{"id":"u1","name":"Ada","role":"user"}"#).unwrap(),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());

        sessions.save(&session());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(sessions.load(), Some(session()));
    }

    #[test]
    fn test_token_without_user_is_no_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        let sessions = SessionStore::new(store);
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_malformed_user_clears_storage() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");
        let sessions = SessionStore::new(store.clone());

        assert!(sessions.load().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_patch_user_persists() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());
        sessions.save(&session());

        let user = sessions.patch_user(IdentityPatch::vault_configured()).unwrap();
        assert!(user.has_vault_password);

        let reloaded = SessionStore::new(store).load().unwrap();
        assert!(reloaded.user.has_vault_password);
        assert_eq!(reloaded.token, "tok-123");
    }

    #[test]
    fn test_patch_without_session_is_noop() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.patch_user(IdentityPatch::vault_configured()).is_none());
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_clear() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save(&session());
        sessions.clear();
        assert!(sessions.load().is_none());
    }
}
