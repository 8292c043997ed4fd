use crate::domain::a004_product::ui::edit::editor::EditorEvent;
use crate::domain::a004_product::ui::edit::form::{ColorChange, ColorKey};
use crate::domain::a004_product::ui::edit::view_model::ProductEditVm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ColorsSection(vm: ProductEditVm) -> impl IntoView {
    let keys = vm.color_keys();
    let locked = vm.is_locked();

    view! {
        <div class="details-section">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h4 class="details-section__title">
                    {move || format!("Colors ({})", keys.get().len())}
                </h4>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.dispatch(EditorEvent::ColorAdded)
                    disabled=locked
                >
                    {icon("plus")}
                    " Add color"
                </Button>
            </div>

            <Show when=move || keys.get().is_empty()>
                <div class="details-section__empty">"No color variants yet"</div>
            </Show>

            <For
                each=move || keys.get()
                key=|key| *key
                children=move |key| view! { <ColorVariantCard vm=vm entry=key /> }
            />
        </div>
    }
}

#[component]
fn ColorVariantCard(vm: ProductEditVm, entry: ColorKey) -> impl IntoView {
    let key = entry;
    let variant = vm.color(key);
    let keys = vm.color_keys();
    let locked = vm.is_locked();
    let new_image = RwSignal::new(String::new());

    let position = move || {
        keys.get()
            .iter()
            .position(|k| *k == key)
            .map(|i| i + 1)
            .unwrap_or_default()
    };
    let color_id = Signal::derive(move || variant.get().map(|v| v.color_id).unwrap_or_default());
    let best_selling = Signal::derive(move || variant.get().map(|v| v.is_best_selling).unwrap_or(false));
    let enabled = Signal::derive(move || variant.get().map(|v| v.is_enabled).unwrap_or(false));

    let parsed_image = move || new_image.get().trim().parse::<i64>().ok();
    let add_image = move |_: leptos::ev::MouseEvent| {
        if let Some(image_id) = parsed_image() {
            vm.change_color(key, ColorChange::AddImage(image_id));
            new_image.set(String::new());
        }
    };

    view! {
        <div class="details-section details-section--nested">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <strong>{move || format!("Color #{}", position())}</strong>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.dispatch(EditorEvent::ColorRemoved(key))
                    disabled=locked
                >
                    {icon("delete")}
                </Button>
            </div>

            <div class="details-grid--3col">
                <Select
                    label="Color"
                    value=color_id
                    on_change=Callback::new(move |v: String| vm.change_color(key, ColorChange::Color(v)))
                    options=vm.color_options()
                    placeholder="Select..."
                    disabled=locked
                />
                <Checkbox
                    label="Best selling"
                    checked=best_selling
                    on_change=Callback::new(move |v: bool| vm.change_color(key, ColorChange::BestSelling(v)))
                    disabled=locked
                />
                <Checkbox
                    label="Enabled"
                    checked=enabled
                    on_change=Callback::new(move |v: bool| vm.change_color(key, ColorChange::Enabled(v)))
                    disabled=locked
                />
            </div>

            <div class="color-images">
                {move || {
                    let Some(current) = variant.get() else {
                        return Vec::new();
                    };
                    current
                        .images
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            let is_main = current.is_main(index);
                            let item_class = if is_main {
                                "color-images__item color-images__item--main"
                            } else {
                                "color-images__item"
                            };
                            let label = image
                                .image_id
                                .map(|id| format!("Image {}", id))
                                .unwrap_or_else(|| "Image".to_string());
                            view! {
                                <div class=item_class>
                                    <span>{label}</span>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| vm.change_color(key, ColorChange::SetMainImage(index))
                                        disabled=Signal::derive(move || is_main || locked.get())
                                    >
                                        {icon("star")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| vm.change_color(key, ColorChange::RemoveImage(index))
                                        disabled=locked
                                    >
                                        {icon("close")}
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div style="display: flex; gap: var(--spacing-sm); align-items: flex-end;">
                <Input
                    label="Image id"
                    value=new_image
                    on_input=Callback::new(move |v: String| new_image.set(v))
                    input_type="number"
                    disabled=locked
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=add_image
                    disabled=Signal::derive(move || parsed_image().is_none() || locked.get())
                >
                    "Add image"
                </Button>
            </div>
        </div>
    }
}
