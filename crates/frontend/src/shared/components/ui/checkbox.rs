use super::flag;
use leptos::prelude::*;

/// Inline checkbox; the caption sits to the right of the box.
#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <label class=move || {
            if flag(disabled) {
                "form__check form__check--disabled"
            } else {
                "form__check"
            }
        }>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || flag(disabled)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span>{label}</span>
        </label>
    }
}
