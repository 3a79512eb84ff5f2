use std::fs;

use jobboard_client::{validate_key, FileStore, KeyValueStore, MemoryStore, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn open_creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("nested").join("data");
    assert!(!data_dir.exists());

    let store = FileStore::open(&data_dir).unwrap();

    assert!(data_dir.is_dir());
    assert_eq!(store.dir(), data_dir.as_path());
}

#[test]
fn open_refuses_a_plain_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    match FileStore::open(&file_path) {
        Err(StoreError::DataDir { path, .. }) => assert_eq!(path, file_path),
        other => panic!("expected DataDir error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_key_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    assert_eq!(store.get("bookmarkedJobs").unwrap(), None);
}

#[test]
fn set_replaces_the_whole_value_in_place() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    store.set("bookmarkedJobs", "[1,2,3]").unwrap();
    store.set("bookmarkedJobs", "[3]").unwrap();

    assert_eq!(store.get("bookmarkedJobs").unwrap().as_deref(), Some("[3]"));
    let path = store.path_for("bookmarkedJobs").unwrap();
    assert_eq!(path, temp.path().join("bookmarkedJobs.json"));
    assert_eq!(fs::read_to_string(path).unwrap(), "[3]");

    // Only the entry itself remains; no temp files are left behind.
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["bookmarkedJobs.json".to_string()]);
}

#[test]
fn path_like_keys_are_rejected_by_both_stores() {
    let temp = TempDir::new().unwrap();
    let file_store = FileStore::open(temp.path()).unwrap();
    let memory_store = MemoryStore::new();

    for key in ["../escape", "", "user profile", "a/b"] {
        assert!(matches!(validate_key(key), Err(StoreError::InvalidKey(_))));
        assert!(matches!(file_store.set(key, "x"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(memory_store.get(key), Err(StoreError::InvalidKey(_))));
    }
    assert!(validate_key("userProfile").is_ok());
    assert!(validate_key("job_board-2").is_ok());
}

#[test]
fn memory_store_overwrites_values() {
    let store = MemoryStore::new();
    store.set("userProfile", "{}").unwrap();
    store.set("userProfile", "{\"skills\":[]}").unwrap();
    assert_eq!(store.get("userProfile").unwrap().as_deref(), Some("{\"skills\":[]}"));
    assert_eq!(store.get("other").unwrap(), None);
}
