use super::{control_class, field_shell, flag};
use leptos::prelude::*;

/// Multi-line text field
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let control = view! {
        <textarea
            class=control_class("form__textarea", error)
            rows=rows
            prop:value=move || value.get()
            disabled=move || flag(disabled)
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    };

    field_shell(label, false, error, control)
}
