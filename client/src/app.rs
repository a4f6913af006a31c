//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::snackbar::Snackbar;
use crate::pages::{profile::ProfilePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Effects only run in the browser, so SSR renders the signed-out shell
    // and the persisted session is restored right after hydration.
    Effect::new(move || auth.set(AuthState::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/profile-portal.css"/>
        <Title text="Profile Portal"/>

        <Snackbar/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProfilePage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
            </Routes>
        </Router>
    }
}
