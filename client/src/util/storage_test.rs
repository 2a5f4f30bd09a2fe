use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("token"), None);
    store.set("token", "t1");
    assert_eq!(store.get("token").as_deref(), Some("t1"));
    store.set("token", "t2");
    assert_eq!(store.get("token").as_deref(), Some("t2"));
    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[test]
fn json_helpers_round_trip_through_store() {
    let store = MemoryStore::default();
    save_json(&store, "list", &vec!["a".to_owned(), "b".to_owned()]);
    let loaded: Option<Vec<String>> = load_json(&store, "list");
    assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn load_json_treats_malformed_entry_as_absent() {
    let store = MemoryStore::default();
    store.set("user", "{not json");
    let loaded: Option<serde_json::Value> = load_json(&store, "user");
    assert!(loaded.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = LocalStorage;
    store.set("token", "t1");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
