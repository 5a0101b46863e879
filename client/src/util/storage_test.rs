use super::*;
use std::rc::Rc;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn unavailable_store_refuses_reads_and_writes() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.get("k"), Err(BrowserError::StorageUnavailable));
    assert!(matches!(store.set("k", "v"), Err(BrowserError::StorageWrite(_))));
}

#[test]
fn shared_store_sees_writes_through_rc() {
    let store = Rc::new(MemoryStore::default());
    let alias = Rc::clone(&store);
    alias.set("theme", "dark").unwrap();
    assert_eq!(store.raw("theme").as_deref(), Some("dark"));
}
