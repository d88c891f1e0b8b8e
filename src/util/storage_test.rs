use super::*;

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("token", "abc").unwrap();
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("missing");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let view = store.clone();
    store.set("user", "{}").unwrap();
    assert_eq!(view.get("user").as_deref(), Some("{}"));
    view.remove("user");
    assert!(store.get("user").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let store = BrowserStorage;
    assert_eq!(store.set("token", "abc"), Err(StorageError::Unavailable));
    assert!(store.get("token").is_none());
    store.remove("token");
}
