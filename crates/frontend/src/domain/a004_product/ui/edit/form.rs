//! Product form model
//!
//! Every scalar is held as the raw text its widget produced; select values are
//! the decimal id and an empty string means unset. `to_payload` turns the draft
//! into the typed `ProductDto` once the schema accepts it.

use contracts::domain::a004_product::{ColorVariantDto, ImageRefDto, ProductDetails, ProductDto};
use contracts::shared::metadata::ValidationRules;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductField {
    NameEn,
    NameRu,
    CategoryId,
    ProductTypeId,
    MaterialTypeId,
    HairStyleId,
    MeasureUnitLengthId,
    FromLength,
    ToLength,
    MeasureUnitWeightId,
    Weight,
    Origin,
    PackingRuleId,
    VideoUrl,
    DescriptionEn,
    DescriptionRu,
}

impl ProductField {
    pub fn label(self) -> &'static str {
        match self {
            ProductField::NameEn => "Name (EN)",
            ProductField::NameRu => "Name (RU)",
            ProductField::CategoryId => "Category",
            ProductField::ProductTypeId => "Product type",
            ProductField::MaterialTypeId => "Material type",
            ProductField::HairStyleId => "Hair style",
            ProductField::MeasureUnitLengthId => "Length unit",
            ProductField::FromLength => "Length from",
            ProductField::ToLength => "Length to",
            ProductField::MeasureUnitWeightId => "Weight unit",
            ProductField::Weight => "Weight",
            ProductField::Origin => "Origin",
            ProductField::PackingRuleId => "Packing rule",
            ProductField::VideoUrl => "Video URL",
            ProductField::DescriptionEn => "Description (EN)",
            ProductField::DescriptionRu => "Description (RU)",
        }
    }

    /// Rules from the schema; `None` for fields outside it (category).
    pub fn rules(self) -> Option<ValidationRules> {
        SCHEMA
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, rules)| *rules)
    }

    pub fn is_required(self) -> bool {
        self.rules().map(|r| r.is_required()).unwrap_or(false)
    }
}

/// Validation schema. The category only scopes the product-type list and is
/// neither validated nor sent.
pub const SCHEMA: &[(ProductField, ValidationRules)] = &[
    (ProductField::NameEn, ValidationRules::required()),
    (ProductField::NameRu, ValidationRules::required()),
    (ProductField::ProductTypeId, ValidationRules::required_reference()),
    (ProductField::MaterialTypeId, ValidationRules::required_reference()),
    (ProductField::HairStyleId, ValidationRules::required_reference()),
    (ProductField::MeasureUnitLengthId, ValidationRules::required_reference()),
    (ProductField::FromLength, ValidationRules::required_number()),
    (ProductField::ToLength, ValidationRules::required_number()),
    (ProductField::MeasureUnitWeightId, ValidationRules::required_reference()),
    (ProductField::Weight, ValidationRules::required_number()),
    (ProductField::Origin, ValidationRules::required()),
    (ProductField::PackingRuleId, ValidationRules::optional_reference()),
    (ProductField::VideoUrl, ValidationRules::required()),
    (ProductField::DescriptionEn, ValidationRules::none()),
    (ProductField::DescriptionRu, ValidationRules::none()),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no color variant at position {index} (have {len})")]
    ColorIndexOutOfRange { index: usize, len: usize },
    #[error("color variant no longer exists")]
    UnknownColor,
    #[error("no image at position {index} (have {len})")]
    ImageIndexOutOfRange { index: usize, len: usize },
}

/// Outcome of validating a draft: one message per failing field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    errors: BTreeMap<ProductField, String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ProductField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<ProductField, String> {
        &self.errors
    }

    fn single(field: ProductField, message: String) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field, message);
        Self { errors }
    }
}

// ============================================================================
// Color variants
// ============================================================================

/// Edit applied to one color variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorChange {
    Color(String),
    BestSelling(bool),
    Enabled(bool),
    AddImage(i64),
    RemoveImage(usize),
    SetMainImage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorVariant {
    /// Selected color id as text, empty when unset
    pub color_id: String,
    pub is_best_selling: bool,
    pub is_enabled: bool,
    pub images: Vec<ImageRefDto>,
}

impl Default for ColorVariant {
    fn default() -> Self {
        Self::from_dto(&ColorVariantDto::default())
    }
}

impl ColorVariant {
    pub fn from_dto(dto: &ColorVariantDto) -> Self {
        Self {
            color_id: dto.color_id.map(|id| id.to_string()).unwrap_or_default(),
            is_best_selling: dto.is_best_selling,
            is_enabled: dto.is_enabled,
            images: dto.images.clone(),
        }
    }

    pub fn to_dto(&self) -> ColorVariantDto {
        ColorVariantDto {
            color_id: self.color_id.trim().parse().ok(),
            is_best_selling: self.is_best_selling,
            is_enabled: self.is_enabled,
            images: self.images.clone(),
        }
    }

    pub fn is_main(&self, index: usize) -> bool {
        self.images
            .get(index)
            .and_then(|img| img.is_main_image)
            .unwrap_or(false)
    }

    /// The first image added to an empty list becomes the main one.
    pub fn add_image(&mut self, image_id: i64) {
        let is_main = !self.images.iter().any(|img| img.is_main_image == Some(true));
        self.images.push(ImageRefDto {
            image_id: Some(image_id),
            is_main_image: Some(is_main),
        });
    }

    /// Removing the main image promotes the first remaining one.
    pub fn remove_image(&mut self, index: usize) -> Result<ImageRefDto, FormError> {
        if index >= self.images.len() {
            return Err(FormError::ImageIndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        let removed = self.images.remove(index);
        if removed.is_main_image == Some(true) {
            if let Some(first) = self.images.first_mut() {
                first.is_main_image = Some(true);
            }
        }
        Ok(removed)
    }

    /// Leaves exactly one main image.
    pub fn set_main_image(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.images.len() {
            return Err(FormError::ImageIndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        for (i, img) in self.images.iter_mut().enumerate() {
            img.is_main_image = Some(i == index);
        }
        Ok(())
    }

    pub fn apply(&mut self, change: ColorChange) -> Result<(), FormError> {
        match change {
            ColorChange::Color(value) => self.color_id = value,
            ColorChange::BestSelling(value) => self.is_best_selling = value,
            ColorChange::Enabled(value) => self.is_enabled = value,
            ColorChange::AddImage(image_id) => self.add_image(image_id),
            ColorChange::RemoveImage(index) => {
                self.remove_image(index)?;
            }
            ColorChange::SetMainImage(index) => self.set_main_image(index)?,
        }
        Ok(())
    }
}

/// Stable identity of a color entry; survives removal of other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey(u64);

/// Ordered color variants addressed by stable keys.
#[derive(Debug, Clone, Default)]
pub struct ColorVariantList {
    entries: HashMap<ColorKey, ColorVariant>,
    order: Vec<ColorKey>,
    next_key: u64,
}

/// Equal when the variants are equal in order; keys are not compared.
impl PartialEq for ColorVariantList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|((_, a), (_, b))| a == b)
    }
}

impl ColorVariantList {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> Vec<ColorKey> {
        self.order.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &ColorVariant)> {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|v| (*key, v)))
    }

    pub fn get(&self, key: ColorKey) -> Option<&ColorVariant> {
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: ColorKey) -> Option<&mut ColorVariant> {
        self.entries.get_mut(&key)
    }

    pub fn push(&mut self, variant: ColorVariant) -> ColorKey {
        let key = ColorKey(self.next_key);
        self.next_key += 1;
        self.entries.insert(key, variant);
        self.order.push(key);
        key
    }

    pub fn remove_at(&mut self, index: usize) -> Option<ColorVariant> {
        if index >= self.order.len() {
            return None;
        }
        let key = self.order.remove(index);
        self.entries.remove(&key)
    }

    pub fn remove(&mut self, key: ColorKey) -> Option<ColorVariant> {
        let index = self.order.iter().position(|k| *k == key)?;
        self.remove_at(index)
    }
}

impl FromIterator<ColorVariant> for ColorVariantList {
    fn from_iter<I: IntoIterator<Item = ColorVariant>>(iter: I) -> Self {
        let mut list = Self::default();
        for variant in iter {
            list.push(variant);
        }
        list
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Helper to convert empty strings to None
fn opt(v: &str) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

fn text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_group_name_en: String,
    pub product_group_name_ru: String,
    pub category_id: String,
    pub product_type_id: String,
    pub material_type_id: String,
    pub hair_style_id: String,
    pub measure_unit_length_id: String,
    pub from_length: String,
    pub to_length: String,
    pub measure_unit_weight_id: String,
    pub weight: String,
    pub origin: String,
    pub packing_rule_id: String,
    pub video_url: String,
    pub description_en: String,
    pub description_ru: String,
    pub colors: ColorVariantList,
}

impl ProductForm {
    /// Defaults overridden field by field with whatever the record carries.
    pub fn from_details(details: &ProductDetails) -> Self {
        Self {
            product_group_name_en: text(details.product_name_en.as_ref()),
            product_group_name_ru: text(details.product_name_ru.as_ref()),
            category_id: text(details.category_id),
            product_type_id: text(details.product_type_id),
            material_type_id: text(details.material_type_id),
            hair_style_id: text(details.hair_style_id),
            measure_unit_length_id: text(details.measure_unit_length_id),
            from_length: text(details.from_length),
            to_length: text(details.to_length),
            measure_unit_weight_id: text(details.measure_unit_weight_id),
            weight: text(details.weight),
            origin: text(details.origin.as_ref()),
            packing_rule_id: text(details.packing_rule_id),
            video_url: text(details.video_url.as_ref()),
            description_en: text(details.description_en.as_ref()),
            description_ru: text(details.description_ru.as_ref()),
            colors: details.colors.iter().map(ColorVariant::from_dto).collect(),
        }
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::NameEn => &self.product_group_name_en,
            ProductField::NameRu => &self.product_group_name_ru,
            ProductField::CategoryId => &self.category_id,
            ProductField::ProductTypeId => &self.product_type_id,
            ProductField::MaterialTypeId => &self.material_type_id,
            ProductField::HairStyleId => &self.hair_style_id,
            ProductField::MeasureUnitLengthId => &self.measure_unit_length_id,
            ProductField::FromLength => &self.from_length,
            ProductField::ToLength => &self.to_length,
            ProductField::MeasureUnitWeightId => &self.measure_unit_weight_id,
            ProductField::Weight => &self.weight,
            ProductField::Origin => &self.origin,
            ProductField::PackingRuleId => &self.packing_rule_id,
            ProductField::VideoUrl => &self.video_url,
            ProductField::DescriptionEn => &self.description_en,
            ProductField::DescriptionRu => &self.description_ru,
        }
    }

    fn slot(&mut self, field: ProductField) -> &mut String {
        match field {
            ProductField::NameEn => &mut self.product_group_name_en,
            ProductField::NameRu => &mut self.product_group_name_ru,
            ProductField::CategoryId => &mut self.category_id,
            ProductField::ProductTypeId => &mut self.product_type_id,
            ProductField::MaterialTypeId => &mut self.material_type_id,
            ProductField::HairStyleId => &mut self.hair_style_id,
            ProductField::MeasureUnitLengthId => &mut self.measure_unit_length_id,
            ProductField::FromLength => &mut self.from_length,
            ProductField::ToLength => &mut self.to_length,
            ProductField::MeasureUnitWeightId => &mut self.measure_unit_weight_id,
            ProductField::Weight => &mut self.weight,
            ProductField::Origin => &mut self.origin,
            ProductField::PackingRuleId => &mut self.packing_rule_id,
            ProductField::VideoUrl => &mut self.video_url,
            ProductField::DescriptionEn => &mut self.description_en,
            ProductField::DescriptionRu => &mut self.description_ru,
        }
    }

    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn validate(&self) -> Validation {
        let errors = SCHEMA
            .iter()
            .filter_map(|(field, rules)| {
                rules
                    .validate(self.get(*field), field.label())
                    .err()
                    .map(|message| (*field, message))
            })
            .collect();
        Validation { errors }
    }

    /// Appends the default variant and returns its key.
    pub fn append_color_variant(&mut self) -> ColorKey {
        self.colors.push(ColorVariant::default())
    }

    pub fn remove_color_variant(&mut self, index: usize) -> Result<ColorVariant, FormError> {
        let len = self.colors.len();
        self.colors
            .remove_at(index)
            .ok_or(FormError::ColorIndexOutOfRange { index, len })
    }

    pub fn remove_color_variant_by_key(&mut self, key: ColorKey) -> Result<ColorVariant, FormError> {
        self.colors.remove(key).ok_or(FormError::UnknownColor)
    }

    pub fn change_color(&mut self, key: ColorKey, change: ColorChange) -> Result<(), FormError> {
        self.colors
            .get_mut(key)
            .ok_or(FormError::UnknownColor)?
            .apply(change)
    }

    pub fn to_payload(&self) -> Result<ProductDto, Validation> {
        let validation = self.validate();
        if !validation.is_valid() {
            return Err(validation);
        }

        Ok(ProductDto {
            product_group_name_en: self.product_group_name_en.trim().to_string(),
            product_group_name_ru: self.product_group_name_ru.trim().to_string(),
            product_type_id: self.parse(ProductField::ProductTypeId)?,
            material_type_id: self.parse(ProductField::MaterialTypeId)?,
            hair_style_id: self.parse(ProductField::HairStyleId)?,
            measure_unit_length_id: self.parse(ProductField::MeasureUnitLengthId)?,
            from_length: self.parse(ProductField::FromLength)?,
            to_length: self.parse(ProductField::ToLength)?,
            measure_unit_weight_id: self.parse(ProductField::MeasureUnitWeightId)?,
            weight: self.parse(ProductField::Weight)?,
            origin: self.origin.trim().to_string(),
            packing_rule_id: match opt(&self.packing_rule_id) {
                Some(_) => Some(self.parse(ProductField::PackingRuleId)?),
                None => None,
            },
            video_url: self.video_url.trim().to_string(),
            description_en: opt(&self.description_en),
            description_ru: opt(&self.description_ru),
            colors: self.colors.iter().map(|(_, v)| v.to_dto()).collect(),
        })
    }

    fn parse<T: std::str::FromStr>(&self, field: ProductField) -> Result<T, Validation> {
        self.get(field).trim().parse::<T>().map_err(|_| {
            Validation::single(field, format!("{} is out of range", field.label()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_product::ProductGroupId;

    /// The draft from the create scenario: every mandatory field filled.
    fn filled_form() -> ProductForm {
        ProductForm {
            product_group_name_en: "A".into(),
            product_group_name_ru: "Б".into(),
            product_type_id: "1".into(),
            material_type_id: "2".into(),
            hair_style_id: "1".into(),
            measure_unit_length_id: "1".into(),
            from_length: "10".into(),
            to_length: "20".into(),
            measure_unit_weight_id: "1".into(),
            weight: "5".into(),
            origin: "VN".into(),
            video_url: "http://x".into(),
            ..ProductForm::default()
        }
    }

    fn empty_details(id: i64) -> ProductDetails {
        ProductDetails {
            product_group_id: ProductGroupId(id),
            product_name_en: None,
            product_name_ru: None,
            category_id: None,
            product_type_id: None,
            material_type_id: None,
            hair_style_id: None,
            measure_unit_length_id: None,
            from_length: None,
            to_length: None,
            measure_unit_weight_id: None,
            weight: None,
            origin: None,
            packing_rule_id: None,
            video_url: None,
            description_en: None,
            description_ru: None,
            colors: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_are_invalid_and_category_is_not_validated() {
        let validation = ProductForm::default().validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.error(ProductField::CategoryId), None);
        assert_eq!(validation.error(ProductField::PackingRuleId), None);
        assert_eq!(validation.error(ProductField::DescriptionEn), None);
        assert_eq!(validation.error(ProductField::NameEn), Some("Name (EN) is required"));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().validate().is_valid());
    }

    #[test]
    fn test_each_mandatory_field_blocks_when_empty() {
        for (field, rules) in SCHEMA.iter().filter(|(_, r)| r.is_required()) {
            let mut form = filled_form();
            form.set(*field, "  ");
            let validation = form.validate();
            assert!(!validation.is_valid(), "{:?} accepted blank", field);
            assert!(validation.error(*field).is_some());
            assert_eq!(validation.errors().len(), 1);
            assert!(rules.is_required());
        }
    }

    #[test]
    fn test_numeric_fields_must_parse() {
        let mut form = filled_form();
        form.set(ProductField::Weight, "5kg");
        form.set(ProductField::PackingRuleId, "bundle");
        let validation = form.validate();
        assert_eq!(validation.error(ProductField::Weight), Some("Weight must be a number"));
        assert!(validation.error(ProductField::PackingRuleId).is_some());

        form.set(ProductField::PackingRuleId, "2");
        form.set(ProductField::Weight, "5.5");
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_length_order_is_not_enforced() {
        let mut form = filled_form();
        form.set(ProductField::FromLength, "30");
        form.set(ProductField::ToLength, "10");
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_payload_matches_draft() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(
            payload,
            ProductDto {
                product_group_name_en: "A".into(),
                product_group_name_ru: "Б".into(),
                product_type_id: 1,
                material_type_id: 2,
                hair_style_id: 1,
                measure_unit_length_id: 1,
                from_length: 10.0,
                to_length: 20.0,
                measure_unit_weight_id: 1,
                weight: 5.0,
                origin: "VN".into(),
                packing_rule_id: None,
                video_url: "http://x".into(),
                description_en: None,
                description_ru: None,
                colors: vec![],
            }
        );
    }

    #[test]
    fn test_payload_rejects_invalid_draft() {
        let mut form = filled_form();
        form.set(ProductField::Origin, "");
        let err = form.to_payload().unwrap_err();
        assert!(err.error(ProductField::Origin).is_some());
    }

    #[test]
    fn test_validity_and_payload_agree_on_wide_ids() {
        for (field, raw) in [
            (ProductField::MaterialTypeId, "3000000000"),
            (ProductField::HairStyleId, "99999999999"),
            (ProductField::PackingRuleId, "4294967296"),
            (ProductField::HairStyleId, "99999999999999999999"),
            (ProductField::Weight, "1e400"),
        ] {
            let mut form = filled_form();
            form.set(field, raw);
            assert_eq!(
                form.validate().is_valid(),
                form.to_payload().is_ok(),
                "{:?} = {}",
                field,
                raw
            );
        }

        let mut form = filled_form();
        form.set(ProductField::HairStyleId, "99999999999");
        assert_eq!(form.to_payload().map(|p| p.hair_style_id), Ok(99_999_999_999));
    }

    #[test]
    fn test_append_adds_default_variant() {
        let mut form = filled_form();
        let key = form.append_color_variant();
        assert_eq!(form.colors.len(), 1);
        assert_eq!(form.colors.get(key), Some(&ColorVariant::default()));

        let variant = ColorVariant::default();
        assert!(variant.is_enabled);
        assert!(!variant.is_best_selling);
        assert!(variant.color_id.is_empty());
        assert!(variant.images.is_empty());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut form = ProductForm::default();
        for color in ["1", "2", "3"] {
            let key = form.append_color_variant();
            form.change_color(key, ColorChange::Color(color.into())).unwrap();
        }

        let removed = form.remove_color_variant(1).unwrap();
        assert_eq!(removed.color_id, "2");
        let left: Vec<&str> = form.colors.iter().map(|(_, v)| v.color_id.as_str()).collect();
        assert_eq!(left, vec!["1", "3"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_draft_unchanged() {
        let mut form = filled_form();
        form.append_color_variant();
        let before = form.clone();

        assert_eq!(
            form.remove_color_variant(5),
            Err(FormError::ColorIndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_keys_survive_removal_of_other_entries() {
        let mut form = ProductForm::default();
        let first = form.append_color_variant();
        let second = form.append_color_variant();
        form.remove_color_variant_by_key(first).unwrap();

        form.change_color(second, ColorChange::BestSelling(true)).unwrap();
        assert!(form.colors.get(second).unwrap().is_best_selling);
        assert_eq!(
            form.change_color(first, ColorChange::Enabled(false)),
            Err(FormError::UnknownColor)
        );

        let third = form.append_color_variant();
        assert_ne!(third, first);
    }

    #[test]
    fn test_colors_go_to_payload_in_order() {
        let mut form = filled_form();
        let a = form.append_color_variant();
        let b = form.append_color_variant();
        form.change_color(a, ColorChange::Color("4".into())).unwrap();
        form.change_color(b, ColorChange::Enabled(false)).unwrap();
        form.change_color(a, ColorChange::AddImage(11)).unwrap();

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.colors.len(), 2);
        assert_eq!(payload.colors[0].color_id, Some(4));
        assert_eq!(payload.colors[0].images[0].image_id, Some(11));
        assert_eq!(payload.colors[1].color_id, None);
        assert!(!payload.colors[1].is_enabled);
    }

    #[test]
    fn test_image_main_flag() {
        let mut variant = ColorVariant::default();
        variant.add_image(1);
        variant.add_image(2);
        variant.add_image(3);
        assert!(variant.is_main(0));
        assert!(!variant.is_main(1));

        variant.set_main_image(2).unwrap();
        let mains: Vec<bool> = (0..3).map(|i| variant.is_main(i)).collect();
        assert_eq!(mains, vec![false, false, true]);

        variant.remove_image(2).unwrap();
        assert!(variant.is_main(0));
        assert_eq!(variant.images.len(), 2);

        assert_eq!(
            variant.set_main_image(7),
            Err(FormError::ImageIndexOutOfRange { index: 7, len: 2 })
        );
    }

    #[test]
    fn test_hydration_overrides_present_fields_only() {
        let mut details = empty_details(15);
        details.product_name_en = Some("Bulk".into());
        details.product_name_ru = Some("Булк".into());
        details.category_id = Some(3);
        details.weight = Some(100.0);
        details.from_length = Some(12.5);
        details.colors = vec![ColorVariantDto {
            color_id: Some(8),
            is_best_selling: true,
            is_enabled: false,
            images: vec![],
        }];

        let form = ProductForm::from_details(&details);
        assert_eq!(form.product_group_name_en, "Bulk");
        assert_eq!(form.product_group_name_ru, "Булк");
        assert_eq!(form.category_id, "3");
        assert_eq!(form.weight, "100");
        assert_eq!(form.from_length, "12.5");
        assert_eq!(form.origin, "");
        assert_eq!(form.packing_rule_id, "");

        let (_, variant) = form.colors.iter().next().unwrap();
        assert_eq!(variant.color_id, "8");
        assert!(variant.is_best_selling);
        assert!(!variant.is_enabled);
    }

    #[test]
    fn test_empty_record_hydrates_to_defaults() {
        assert_eq!(ProductForm::from_details(&empty_details(1)), ProductForm::default());
    }

    #[test]
    fn test_blank_descriptions_are_omitted() {
        let mut form = filled_form();
        form.set(ProductField::DescriptionEn, "   ");
        form.set(ProductField::DescriptionRu, "Описание");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.description_en, None);
        assert_eq!(payload.description_ru.as_deref(), Some("Описание"));
    }
}
