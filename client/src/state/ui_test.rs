use super::*;

#[test]
fn ui_state_default_has_no_notification() {
    let state = UiState::default();
    assert!(!state.notification.is_open());
}

#[test]
fn ui_state_default_editor_closed() {
    let state = UiState::default();
    assert!(!state.editor_open);
}
