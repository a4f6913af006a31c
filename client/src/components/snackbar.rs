//! Transient notification bar.
//!
//! DESIGN
//! ======
//! Every new message restarts a 3 second timer. A timer only clears the
//! message if the notification sequence has not moved since it started, so
//! successive notifications, including repeats of the same text, each get
//! their full display time.

#[cfg(test)]
#[path = "snackbar_test.rs"]
mod snackbar_test;

use account::Notification;
use leptos::prelude::*;

use crate::state::ui::UiState;

/// Whether a timer started for notification `started` may still clear it.
/// Any later `set`, even with identical text, invalidates the timer.
pub fn timer_is_current(notification: &Notification, started: u64) -> bool {
    notification.sequence() == started
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let shown = Memo::new(move |_| {
        ui.with(|u| {
            u.notification
                .message()
                .map(|m| (u.notification.sequence(), m.to_owned()))
        })
    });

    Effect::new(move || {
        let Some(started) = shown.with(|s| s.as_ref().map(|(seq, _)| *seq)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(account::notification::AUTO_HIDE).await;
            ui.update(|u| {
                if timer_is_current(&u.notification, started) {
                    u.notification.clear();
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = started;
    });

    let dismiss = move |_| ui.update(|u| u.notification.clear());

    view! {
        <Show when=move || shown.with(Option::is_some)>
            <div class="snackbar" role="status" on:click=dismiss>
                <span class="snackbar__message">
                    {move || shown.with(|s| s.as_ref().map(|(_, m)| m.clone()).unwrap_or_default())}
                </span>
            </div>
        </Show>
    }
}
