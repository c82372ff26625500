#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("k"), None);
    storage.set("k", "v1");
    assert_eq!(storage.get("k"), Some("v1".to_owned()));
    storage.set("k", "v2");
    assert_eq!(storage.get("k"), Some("v2".to_owned()));
}

#[test]
fn memory_storage_remove_clears_key() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_storage_keys_are_independent() {
    let storage = MemoryStorage::default();
    storage.set("a", "1");
    storage.set("b", "2");
    storage.remove("a");
    assert_eq!(storage.get("a"), None);
    assert_eq!(storage.get("b"), Some("2".to_owned()));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[test]
fn browser_storage_is_noop_without_a_window() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}
