use super::{FieldInput, FieldSelect};
use crate::domain::a004_product::ui::edit::form::ProductField;
use crate::domain::a004_product::ui::edit::view_model::ProductEditVm;
use contracts::enums::{
    CatalogEnum, HairStyle, LengthMeasureUnit, MaterialType, PackingRule, WeightMeasureUnit,
};
use contracts::shared::options::{enum_to_select_options, SelectOption};
use leptos::prelude::*;

fn enum_pairs<E: CatalogEnum>() -> Signal<Vec<(String, String)>> {
    let pairs: Vec<(String, String)> = enum_to_select_options::<E>()
        .into_iter()
        .map(SelectOption::into_pair)
        .collect();
    Signal::stored(pairs)
}

#[component]
pub fn GeneralSection(vm: ProductEditVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"General"</h4>
            <div class="details-grid--2col">
                <FieldInput vm=vm field=ProductField::NameEn />
                <FieldInput vm=vm field=ProductField::NameRu />
                <FieldSelect vm=vm field=ProductField::CategoryId options=vm.category_options() />
                <FieldSelect vm=vm field=ProductField::ProductTypeId options=vm.product_type_options() />
                <FieldSelect vm=vm field=ProductField::MaterialTypeId options={enum_pairs::<MaterialType>()} />
                <FieldSelect vm=vm field=ProductField::HairStyleId options={enum_pairs::<HairStyle>()} />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Size and packing"</h4>
            <div class="details-grid--3col">
                <FieldSelect
                    vm=vm
                    field=ProductField::MeasureUnitLengthId
                    options={enum_pairs::<LengthMeasureUnit>()}
                />
                <FieldInput vm=vm field=ProductField::FromLength input_type="number" />
                <FieldInput vm=vm field=ProductField::ToLength input_type="number" />
                <FieldSelect
                    vm=vm
                    field=ProductField::MeasureUnitWeightId
                    options={enum_pairs::<WeightMeasureUnit>()}
                />
                <FieldInput vm=vm field=ProductField::Weight input_type="number" />
                <FieldSelect vm=vm field=ProductField::PackingRuleId options={enum_pairs::<PackingRule>()} />
            </div>
            <div class="details-grid--2col">
                <FieldInput vm=vm field=ProductField::Origin />
                <FieldInput vm=vm field=ProductField::VideoUrl input_type="url" />
            </div>
        </div>
    }
}
