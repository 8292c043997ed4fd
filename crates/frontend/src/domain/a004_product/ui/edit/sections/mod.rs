mod colors;
mod descriptions;
mod general;

pub use colors::ColorsSection;
pub use descriptions::DescriptionsSection;
pub use general::GeneralSection;

use super::form::ProductField;
use super::view_model::ProductEditVm;
use crate::shared::components::ui::{Input, Select};
use leptos::prelude::*;

/// Input bound to one draft field
#[component]
fn FieldInput(
    vm: ProductEditVm,
    field: ProductField,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <Input
            label=field.label()
            value=vm.field(field)
            on_input=vm.set_field(field)
            input_type=input_type
            required=field.is_required()
            error=vm.error(field)
            disabled=vm.is_locked()
        />
    }
}

/// Select bound to one draft field
#[component]
fn FieldSelect(
    vm: ProductEditVm,
    field: ProductField,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <Select
            label=field.label()
            value=vm.field(field)
            on_change=vm.set_field(field)
            options=options
            placeholder="Select..."
            required=field.is_required()
            error=vm.error(field)
            disabled=vm.is_locked()
        />
    }
}
