use super::*;

#[test]
fn default_is_closed() {
    let n = Notification::default();
    assert!(!n.is_open());
    assert_eq!(n.message(), None);
}

#[test]
fn set_replaces_message() {
    let mut n = Notification::default();
    n.set("first");
    n.set(SIGN_IN_SUCCESS);
    assert!(n.is_open());
    assert_eq!(n.message(), Some("Sign in successfully!"));
}

#[test]
fn empty_message_means_closed() {
    let mut n = Notification::default();
    n.set("boom");
    n.set("");
    assert!(!n.is_open());
}

#[test]
fn clear_hides_message() {
    let mut n = Notification::default();
    n.set(UPDATE_SUCCESS);
    n.clear();
    assert_eq!(n.message(), None);
}

#[test]
fn auto_hide_is_three_seconds() {
    assert_eq!(AUTO_HIDE.as_millis(), 3000);
}

#[test]
fn repeating_a_message_bumps_sequence() {
    let mut n = Notification::default();
    n.set("Invalid credentials");
    let first = n.sequence();
    n.set("Invalid credentials");
    assert_eq!(n.message(), Some("Invalid credentials"));
    assert!(n.sequence() > first);
}

#[test]
fn clear_keeps_sequence() {
    let mut n = Notification::default();
    n.set(SIGN_UP_SUCCESS);
    let seq = n.sequence();
    n.clear();
    assert_eq!(n.sequence(), seq);
}
