use account::{SessionStore, User};
use tempfile::TempDir;

use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@example.com".to_owned(),
        description: Some("about".to_owned()),
        avatar: None,
        date_of_birth: None,
    }
}

#[test]
fn missing_file_opens_empty() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = FileStorage::open(tmp.path().join("session.json")).expect("open");
    assert_eq!(storage.get("user"), None);
}

#[test]
fn session_survives_reopen() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("nested/session.json");

    let mut store = SessionStore::load(FileStorage::open(&path).expect("open"));
    store.set_user_and_token(user(), "tok".to_owned());

    let reopened = SessionStore::load(FileStorage::open(&path).expect("reopen"));
    assert_eq!(reopened.token(), Some("tok"));
    assert_eq!(reopened.user(), Some(&user()));
}

#[test]
fn log_out_removes_both_keys_from_disk() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("session.json");

    let mut store = SessionStore::load(FileStorage::open(&path).expect("open"));
    store.set_user_and_token(user(), "tok".to_owned());
    store.log_out();

    let storage = FileStorage::open(&path).expect("reopen");
    assert_eq!(storage.get("user"), None);
    assert_eq!(storage.get("token"), None);
}

#[test]
fn malformed_file_opens_empty() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("session.json");
    fs::write(&path, "{not json").expect("write");

    let storage = FileStorage::open(&path).expect("open");
    assert_eq!(storage.get("user"), None);
    assert_eq!(storage.get("token"), None);
}

#[test]
fn log_out_rewrites_malformed_file() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("session.json");
    fs::write(&path, "{not json").expect("write");

    let mut store = SessionStore::load(FileStorage::open(&path).expect("open"));
    assert!(!store.is_authenticated());
    store.log_out();

    let text = fs::read_to_string(&path).expect("read");
    let entries: BTreeMap<String, String> = serde_json::from_str(&text).expect("valid json");
    assert!(entries.is_empty());
}
