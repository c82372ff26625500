//! Durable key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists its record through this seam instead of
//! reaching for `localStorage` directly, so unit tests can observe writes
//! through an in-memory backend and server rendering stays side-effect free.
//!
//! All operations are best-effort: quota errors and missing browser APIs
//! degrade to no-ops rather than surfacing to callers.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Durable string key/value storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`.
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.lock().unwrap().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }
}
