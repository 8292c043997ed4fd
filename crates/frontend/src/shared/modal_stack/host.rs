use super::{ModalEntry, ModalHandle, ModalStackService};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const BASE_Z_INDEX: usize = 1000;

/// Renders the modal stack at the application root. Mount exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                svc.request_dismiss_top();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            if window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not register Escape handler for modals");
            }
            // Lives as long as the app.
            on_keydown.forget();
        }
    });

    view! {
        <For
            each=move || svc.stack.with(|s| s.entries.iter().cloned().enumerate().collect::<Vec<_>>())
            key=|(_, entry)| entry.id
            children=move |(depth, entry)| view! { <ModalSurface svc=svc entry=entry depth=depth /> }
        />
    }
}

/// Overlay plus positioned surface for one entry.
///
/// The overlay closes the entry only when press and release both land on it,
/// so a text selection dragged out of the dialog does not dismiss it.
#[component]
fn ModalSurface(svc: ModalStackService, entry: ModalEntry, depth: usize) -> impl IntoView {
    let id = entry.id;
    let pressed_on_overlay = StoredValue::new(false);
    let on_overlay = |ev: &MouseEvent| ev.target().is_some() && ev.target() == ev.current_target();

    let surface_class = match entry.options.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal {extra}"),
        _ => "modal".to_string(),
    };
    let surface_style = format!(
        "position: relative; {}",
        entry.options.style.as_deref().unwrap_or_default()
    );
    let content = (entry.builder)(ModalHandle { id, svc });

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", BASE_Z_INDEX + depth)
            on:mousedown=move |ev: MouseEvent| pressed_on_overlay.set_value(on_overlay(&ev))
            on:click=move |ev: MouseEvent| {
                if pressed_on_overlay.get_value() && on_overlay(&ev) {
                    svc.request_dismiss(id);
                }
                pressed_on_overlay.set_value(false);
            }
        >
            <div class=surface_class style=surface_style>
                {content}
            </div>
        </div>
    }
}
