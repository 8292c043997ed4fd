use super::{control_class, field_shell, flag};
use leptos::prelude::*;

/// Drop-down over `(value, label)` pairs.
///
/// An empty entry always comes first so a blank value stays selectable; a
/// value missing from `options` also falls back to it.
#[component]
pub fn Select(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Caption of the empty entry
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_default();

    let control = view! {
        <select
            class=control_class("form__select", error)
            disabled=move || flag(disabled)
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <option value="" selected=move || value.with(String::is_empty)>
                {placeholder}
            </option>
            // Positions are part of the key: reference lists may repeat a value.
            <For
                each=move || options.get().into_iter().enumerate()
                key=|(idx, option)| (*idx, option.clone())
                children=move |(_, (option_value, caption))| {
                    let current = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.with(|v| *v == current)>
                            {caption}
                        </option>
                    }
                }
            />
        </select>
    };

    field_shell(label, required, error, control)
}
