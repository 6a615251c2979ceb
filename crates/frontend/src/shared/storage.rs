//! Key-value persistence for client-side state.
//!
//! The browser implementation talks to `window.localStorage`; `MemoryStore`
//! is used when local storage is unavailable and in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use web_sys::window;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }

    pub fn is_available() -> bool {
        Self::local_storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage.setItem failed: {:?}", e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store; contents are lost on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}

/// Local storage when the browser offers it, memory otherwise.
pub fn default_store() -> Arc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("localStorage is not available; the cart will not survive a reload");
        Arc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("posCart"), None);

        store.set("posCart", "[]").unwrap();
        assert_eq!(store.get("posCart").as_deref(), Some("[]"));

        store.set("posCart", "[1]").unwrap();
        assert_eq!(store.get("posCart").as_deref(), Some("[1]"));

        store.remove("posCart");
        assert_eq!(store.get("posCart"), None);
    }
}
