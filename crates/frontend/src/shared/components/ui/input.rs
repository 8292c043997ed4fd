use super::{control_class, field_shell, flag};
use leptos::prelude::*;

/// Single-line text or number field
#[component]
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    /// `text` unless given (`number`, `url`, ...)
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let step = (input_type == "number").then_some("any");

    let control = view! {
        <input
            class=control_class("form__input", error)
            type=input_type
            step=step
            prop:value=move || value.get()
            disabled=move || flag(disabled)
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    };

    field_shell(label, required, error, control)
}
