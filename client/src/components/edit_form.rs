//! Profile editor dialog: avatar upload, description and date of birth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the profile page via `UiState::editor_open`. On success the
//! returned user replaces the session user (token untouched) and the dialog
//! closes; on failure it stays open with the error surfaced.
//!
//! Local avatar previews are object URLs. The previous one is revoked when
//! another file is picked, and the last one when the dialog unmounts.

#[cfg(test)]
#[path = "edit_form_test.rs"]
mod edit_form_test;

use account::flows;
use account::validate::{Field, FieldError, ProfileForm};
use leptos::prelude::*;

use crate::components::text_field::{TextField, field_message};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Whether `url` was minted by `URL.createObjectURL` and must be revoked.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

#[cfg(feature = "hydrate")]
fn revoke_preview(url: Option<String>) {
    if let Some(url) = url.filter(|u| is_object_url(u)) {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[cfg(feature = "hydrate")]
fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[component]
pub fn EditForm(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let (initial, current_avatar) = auth.with_untracked(|a| {
        let user = a.user();
        (
            user.map(ProfileForm::from_user).unwrap_or_default(),
            user.and_then(|u| u.avatar()).map(str::to_owned),
        )
    });
    let description = RwSignal::new(initial.description);
    let date_of_birth = RwSignal::new(initial.date_of_birth.unwrap_or_default());
    let preview = RwSignal::new(current_avatar);
    let error = RwSignal::new(None::<FieldError>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    on_cleanup(move || revoke_preview(preview.try_get_untracked().flatten()));

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = selected_file(file_input) {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    let previous = preview.get_untracked();
                    preview.set(Some(url));
                    revoke_preview(previous);
                }
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            description: description.get_untracked(),
            date_of_birth: Some(date_of_birth.get_untracked()).filter(|d| !d.is_empty()),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let avatar = selected_file(file_input);
            let api = auth.with_untracked(|a| crate::net::api::GraphqlApi::for_session(&a.session));
            leptos::task::spawn_local(async move {
                let result = flows::update_profile(&api, &form, avatar).await;
                busy.set(false);
                match result {
                    Ok(user) => {
                        error.set(None);
                        auth.update(|a| {
                            ui.update(|u| flows::apply_profile_update(&mut a.session, &mut u.notification, user));
                        });
                        on_close.run(());
                    }
                    Err(err) => {
                        error.set(err.field_error().cloned());
                        ui.update(|u| flows::apply_failure(&mut u.notification, &err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, ui);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--profile"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <h2>"Edit profile"</h2>
                <div class="dialog__avatar">
                    <Show
                        when=move || preview.with(Option::is_some)
                        fallback=|| view! { <div class="avatar avatar--empty"></div> }
                    >
                        <img class="avatar" alt="Avatar" src=move || preview.get().unwrap_or_default()/>
                    </Show>
                    <label class="dialog__upload">
                        "Upload avatar"
                        <input type="file" accept="image/*" node_ref=file_input on:change=on_file_change/>
                    </label>
                </div>
                <TextField
                    label="Description"
                    value=description
                    error=field_message(error, Field::Description)
                    multiline=true
                />
                <TextField
                    label="Date of birth"
                    value=date_of_birth
                    error=Signal::derive(|| None::<&'static str>)
                    input_type="date"
                />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Submit"
                    </button>
                </div>
            </form>
        </div>
    }
}
