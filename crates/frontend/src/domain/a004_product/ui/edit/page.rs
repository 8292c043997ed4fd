//! Product edit dialog component
//!
//! Thin wrapper that creates the ViewModel, opens the editor and renders the
//! header, tab bar and active section.

use super::editor::{DialogResult, EditorEvent};
use super::sections::{ColorsSection, DescriptionsSection, GeneralSection};
use super::view_model::ProductEditVm;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::a004_product::ProductListItem;
use leptos::prelude::*;
use thaw::*;

const TABS: &[(&str, &str)] = &[
    ("general", "General"),
    ("colors", "Colors"),
    ("descriptions", "Descriptions"),
];

/// Create (`product = None`) or edit dialog for one product.
///
/// `submitting` mirrors the in-flight submission so the host can refuse to
/// close the modal mid-request. Each bump of `dismiss_requests` (overlay click,
/// Escape) cancels the dialog as if Cancel were pressed.
#[component]
pub fn ProductEditDialog(
    product: Option<ProductListItem>,
    #[prop(into)] on_close: Callback<DialogResult>,
    #[prop(optional)] submitting: Option<RwSignal<bool>>,
    #[prop(optional)] dismiss_requests: Option<RwSignal<u64>>,
) -> impl IntoView {
    let notifications = use_context::<NotificationService>()
        .expect("NotificationService not found in context");

    let title = match &product {
        Some(item) => format!("Edit product: {}", item.product_name_en),
        None => "New product".to_string(),
    };

    let vm = ProductEditVm::new(
        product.map(|item| item.product_group_id),
        notifications,
        on_close,
    );
    vm.dispatch(EditorEvent::Open);

    if let Some(submitting) = submitting {
        let is_locked = vm.is_locked();
        Effect::new(move |_| {
            submitting.try_set(is_locked.get());
        });
    }

    if let Some(requests) = dismiss_requests {
        Effect::watch(
            move || requests.get(),
            move |_, _, _| vm.dispatch(EditorEvent::Cancel),
            false,
        );
    }

    let active_tab = RwSignal::new("general");

    view! {
        <div class="details-container product-details">
            <Header vm=vm title=title />

            <div class="modal-body">
                <div class="details-tabs">
                    {TABS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <Button
                                    appearance=Signal::derive(move || {
                                        if active_tab.get() == id {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Subtle
                                        }
                                    })
                                    size=ButtonSize::Small
                                    on_click=move |_| active_tab.set(id)
                                >
                                    {*label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>

                <div style="height: 60vh; overflow-y: auto; overflow-x: hidden;">
                    {move || match active_tab.get() {
                        "colors" => view! { <ColorsSection vm=vm /> }.into_any(),
                        "descriptions" => view! { <DescriptionsSection vm=vm /> }.into_any(),
                        _ => view! { <GeneralSection vm=vm /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: ProductEditVm, title: String) -> impl IntoView {
    let is_busy = vm.is_busy();
    let is_locked = vm.is_locked();
    let is_save_disabled = vm.is_save_disabled();
    let save_label = if vm.is_edit_mode() { " Update" } else { " Create" };

    view! {
        <div class="modal-header">
            <h3 class="modal-title">{title}</h3>
            <div class="modal-header-actions">
                <Show when=move || is_busy.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.dispatch(EditorEvent::Submit)
                    disabled=is_save_disabled
                >
                    {icon("products")}
                    {save_label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.dispatch(EditorEvent::Cancel)
                    disabled=is_locked
                >
                    {icon("close")}
                    " Cancel"
                </Button>
            </div>
        </div>
    }
}
