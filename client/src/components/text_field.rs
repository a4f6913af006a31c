//! Labelled form input with an inline validation message.

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use account::validate::{Field, FieldError};
use leptos::prelude::*;

/// Message to show under `field`, if the form's first error belongs to it.
pub fn message_for(error: Option<&FieldError>, field: Field) -> Option<&'static str> {
    error.filter(|e| e.field == field).map(|e| e.message)
}

/// Signal yielding the inline message for one field of a form.
pub fn field_message(error: RwSignal<Option<FieldError>>, field: Field) -> Signal<Option<&'static str>> {
    Signal::derive(move || error.with(|e| message_for(e.as_ref(), field)))
}

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                class="field__input field__input--multiline"
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field" class:field--error=move || error.get().is_some()>
            <span class="field__label">{label}</span>
            {input}
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
