use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Sample {
    label: String,
    value: i32,
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_absent_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::default();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::with_entries([("k", "old")]);
    store.set("k", "new").unwrap();
    assert_eq!(store.raw("k").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let store = MemoryStore::default();
    assert!(store.remove("missing").is_ok());
    assert!(store.is_empty());
}

#[test]
fn memory_store_failing_writes_leave_entries_untouched() {
    let store = MemoryStore::with_entries([("k", "v")]);
    store.set_fail_writes(true);
    assert!(matches!(store.set("k", "x"), Err(StorageError::Write { .. })));
    assert!(matches!(store.remove("k"), Err(StorageError::Remove { .. })));
    assert_eq!(store.raw("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_reads_still_work_when_writes_fail() {
    let store = MemoryStore::with_entries([("k", "v")]);
    store.set_fail_writes(true);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn load_json_absent_key_is_none() {
    let store = MemoryStore::default();
    let loaded: Option<Sample> = load_json(&store, "sample").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_json_then_load_json() {
    let store = MemoryStore::default();
    let sample = Sample { label: "a".to_owned(), value: 7 };
    save_json(&store, "sample", &sample).unwrap();
    assert_eq!(store.raw("sample").as_deref(), Some(r#"{"label":"a","value":7}"#));
    let loaded: Option<Sample> = load_json(&store, "sample").unwrap();
    assert_eq!(loaded, Some(sample));
}

#[test]
fn load_json_malformed_value_reports_key() {
    let store = MemoryStore::with_entries([("sample", "{not json")]);
    let err = load_json::<Sample>(&store, "sample").unwrap_err();
    match err {
        StorageError::Malformed { key, .. } => assert_eq!(key, "sample"),
        other => panic!("unexpected error: {other:?}"),
    }
    // Malformed data is not repaired.
    assert_eq!(store.raw("sample").as_deref(), Some("{not json"));
}

#[test]
fn save_json_propagates_write_failure() {
    let store = MemoryStore::default();
    store.set_fail_writes(true);
    let err = save_json(&store, "sample", &Sample { label: "a".to_owned(), value: 1 }).unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
}

#[test]
fn storage_error_display_names_key() {
    let err = StorageError::Write { key: "authUser".to_owned(), reason: "quota exceeded".to_owned() };
    assert_eq!(err.to_string(), "write failed for `authUser`: quota exceeded");
}

#[test]
fn default_store_is_usable_outside_browser() {
    let store = default_store();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
