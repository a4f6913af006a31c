//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form inputs, the notification snackbar and the profile
//! editor while reading/writing shared state from Leptos context providers.

pub mod edit_form;
pub mod snackbar;
pub mod text_field;
