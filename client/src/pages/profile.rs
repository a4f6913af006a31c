//! Profile page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the stored user, offers logout and opens the profile editor. Signed
//! out visitors are redirected to `/signin` once the session has loaded.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use account::User;
use account::user::format_date_of_birth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::edit_form::EditForm;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// Display-ready view of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub greeting: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub date_of_birth: Option<String>,
}

impl ProfileSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            greeting: format!("Hello, {}", user.email),
            avatar: user.avatar().map(str::to_owned),
            description: user.description().map(str::to_owned),
            date_of_birth: user.date_of_birth().map(format_date_of_birth),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let summary = Memo::new(move |_| auth.with(|a| a.user().map(ProfileSummary::from_user)));
    let field = move |pick: fn(&ProfileSummary) -> Option<String>| {
        move || summary.with(|s| s.as_ref().and_then(pick))
    };
    let avatar = field(|s| s.avatar.clone());
    let description = field(|s| s.description.clone());
    let date_of_birth = field(|s| s.date_of_birth.clone());
    let greeting = move || summary.with(|s| s.as_ref().map(|s| s.greeting.clone()).unwrap_or_default());

    let on_log_out = move |_| {
        ui.update(|u| u.editor_open = false);
        auth.update(|a| a.session.log_out());
    };
    let open_editor = move |_| ui.update(|u| u.editor_open = true);
    let close_editor = Callback::new(move |()| ui.update(|u| u.editor_open = false));

    view! {
        <div class="profile-page">
            <Show
                when=move || summary.with(Option::is_some)
                fallback=|| view! { <p class="profile-page__loading">"Loading..."</p> }
            >
                <div class="profile-card">
                    <header class="profile-card__header">
                        <h1>{greeting}</h1>
                        <button class="btn" on:click=on_log_out>"Log out"</button>
                    </header>
                    <Show when=move || avatar().is_some()>
                        <img class="avatar avatar--large" alt="Avatar" src=move || avatar().unwrap_or_default()/>
                    </Show>
                    <Show when=move || description().is_some()>
                        <p class="profile-card__description">{move || description().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || date_of_birth().is_some()>
                        <p class="profile-card__dob">
                            "Date of birth: "
                            <span>{move || date_of_birth().unwrap_or_default()}</span>
                        </p>
                    </Show>
                    <button class="btn btn--primary" on:click=open_editor>"Edit"</button>
                </div>
                <Show when=move || ui.with(|u| u.editor_open)>
                    <EditForm on_close=close_editor/>
                </Show>
            </Show>
        </div>
    }
}
