#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn get_is_empty_without_browser() {
    assert_eq!(BrowserStorage.get("user"), None);
}

#[test]
fn writes_report_unavailable_without_browser() {
    let mut storage = BrowserStorage;
    assert!(matches!(storage.set("token", "\"t\""), Err(StorageError::Unavailable)));
    assert!(matches!(storage.remove("token"), Err(StorageError::Unavailable)));
}
