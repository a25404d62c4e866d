use super::*;

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::default();
    store.set("token", "t1");
    assert_eq!(store.get("token").as_deref(), Some("t1"));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::default();
    store.set("token", "t1");
    store.set("token", "t2");
    assert_eq!(store.get("token").as_deref(), Some("t2"));
}

#[test]
fn memory_store_remove_clears_key() {
    let store = MemoryStore::default();
    store.set("token", "t1");
    store.remove("token");
    assert_eq!(store.get("token"), None);
}
