use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().get(), None);
}

#[test]
fn memory_store_set_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new");
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("t");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn reference_delegates_to_inner_store() {
    let store = MemoryTokenStore::new();
    let by_ref = &store;
    by_ref.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    by_ref.clear();
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_outside_browser() {
    let store = LocalStorageTokenStore;
    store.set("ignored");
    assert_eq!(store.get(), None);
    store.clear();
}
