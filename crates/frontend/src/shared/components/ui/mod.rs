//! Form widgets used by the product dialog.
//!
//! Every labelled widget renders through [`field_shell`], which owns the
//! label, the required marker and the inline validation message.

pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Field label, with the required marker appended.
pub(crate) fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Reads an optional flag prop; absent means `false`.
pub(crate) fn flag(signal: Option<Signal<bool>>) -> bool {
    signal.map(|s| s.get()).unwrap_or(false)
}

/// Base class plus its `--invalid` modifier while `error` holds a message.
pub(crate) fn control_class(
    base: &'static str,
    error: Option<Signal<Option<String>>>,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let invalid = error.map(|e| e.with(Option::is_some)).unwrap_or(false);
        if invalid {
            format!("{base} {base}--invalid")
        } else {
            base.to_string()
        }
    }
}

/// Wrapping `<label>` so clicking the caption focuses the control.
pub(crate) fn field_shell(
    label: Option<String>,
    required: bool,
    error: Option<Signal<Option<String>>>,
    control: impl IntoView + 'static,
) -> impl IntoView {
    view! {
        <label class="form__group">
            {label.map(|l| view! { <span class="form__label">{label_text(&l, required)}</span> })}
            {control}
            {move || error.and_then(|e| e.get()).map(|msg| view! { <span class="form__error">{msg}</span> })}
        </label>
    }
}
