use crate::domain::a004_product::ui::edit::form::ProductField;
use crate::domain::a004_product::ui::edit::view_model::ProductEditVm;
use crate::shared::components::ui::Textarea;
use leptos::prelude::*;

#[component]
pub fn DescriptionsSection(vm: ProductEditVm) -> impl IntoView {
    let description = move |field: ProductField| {
        view! {
            <Textarea
                label=field.label()
                value=vm.field(field)
                on_input=vm.set_field(field)
                rows=5
                error=vm.error(field)
                disabled=vm.is_locked()
            />
        }
    };

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Descriptions"</h4>
            {description(ProductField::DescriptionEn)}
            {description(ProductField::DescriptionRu)}
        </div>
    }
}
