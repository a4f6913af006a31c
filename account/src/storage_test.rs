use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("user"), None);
}

#[test]
fn memory_storage_set_replaces_value() {
    let mut storage = MemoryStorage::new();
    storage.set("token", "a").expect("set");
    storage.set("token", "b").expect("set");
    assert_eq!(storage.get("token").as_deref(), Some("b"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let mut storage = MemoryStorage::new();
    storage.remove("nope").expect("remove");
    storage.set("user", "{}").expect("set");
    storage.remove("user").expect("remove");
    assert!(storage.is_empty());
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("quota".to_owned()).to_string(), "storage write failed: quota");
}
