#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use account::Notification;

/// UI state shared across pages: the snackbar notification and whether the
/// profile editor is open.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notification: Notification,
    pub editor_open: bool,
}
