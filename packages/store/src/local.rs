//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It writes straight into `window.localStorage`, which survives page
//! reloads and is scoped to the site origin.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Storage can be unavailable (private browsing, quota
//! exceeded, disabled by policy); the client then behaves as if nobody is logged in
//! rather than failing to start.

use web_sys::Storage;

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
