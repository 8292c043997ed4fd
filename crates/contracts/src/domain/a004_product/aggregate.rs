use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductGroupId(pub i64);

impl ProductGroupId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductGroupId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductGroupId::new)
    }
}

// ============================================================================
// Color variants and images
// ============================================================================

/// Image attached to a color variant. Both fields are nullable on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRefDto {
    #[serde(rename = "imageId")]
    pub image_id: Option<i64>,
    #[serde(rename = "isMainImage")]
    pub is_main_image: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariantDto {
    #[serde(rename = "colorId")]
    pub color_id: Option<i64>,
    #[serde(rename = "isBestSelling", default)]
    pub is_best_selling: bool,
    #[serde(rename = "isEnabled", default = "enabled_by_default")]
    pub is_enabled: bool,
    #[serde(default)]
    pub images: Vec<ImageRefDto>,
}

fn enabled_by_default() -> bool {
    true
}

/// A freshly appended variant: no color, enabled, not a best seller, no images.
impl Default for ColorVariantDto {
    fn default() -> Self {
        Self {
            color_id: None,
            is_best_selling: false,
            is_enabled: true,
            images: Vec::new(),
        }
    }
}

// ============================================================================
// Create / update payload
// ============================================================================

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// Carries no identity: the id travels in the URL on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "productGroupNameEn")]
    pub product_group_name_en: String,
    #[serde(rename = "productGroupNameRu")]
    pub product_group_name_ru: String,
    #[serde(rename = "productTypeId")]
    pub product_type_id: i64,
    #[serde(rename = "materialTypeId")]
    pub material_type_id: i64,
    #[serde(rename = "hairStyleId")]
    pub hair_style_id: i64,
    #[serde(rename = "measureUnitLengthId")]
    pub measure_unit_length_id: i64,
    #[serde(rename = "fromLength")]
    pub from_length: f64,
    #[serde(rename = "toLength")]
    pub to_length: f64,
    #[serde(rename = "measureUnitWeightId")]
    pub measure_unit_weight_id: i64,
    pub weight: f64,
    pub origin: String,
    #[serde(rename = "packingRuleId")]
    pub packing_rule_id: Option<i64>,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[serde(rename = "descriptionEn")]
    pub description_en: Option<String>,
    #[serde(rename = "descriptionRu")]
    pub description_ru: Option<String>,
    pub colors: Vec<ColorVariantDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: ProductGroupId,
}

// ============================================================================
// Read models
// ============================================================================

/// Full record returned by `GET /api/products/{id}`.
///
/// Names come back as `productNameEn/Ru`; every other field mirrors the payload.
/// Anything the server omits falls back to the empty form default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(rename = "productGroupId")]
    pub product_group_id: ProductGroupId,
    #[serde(rename = "productNameEn", default)]
    pub product_name_en: Option<String>,
    #[serde(rename = "productNameRu", default)]
    pub product_name_ru: Option<String>,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<i64>,
    #[serde(rename = "productTypeId", default)]
    pub product_type_id: Option<i64>,
    #[serde(rename = "materialTypeId", default)]
    pub material_type_id: Option<i64>,
    #[serde(rename = "hairStyleId", default)]
    pub hair_style_id: Option<i64>,
    #[serde(rename = "measureUnitLengthId", default)]
    pub measure_unit_length_id: Option<i64>,
    #[serde(rename = "fromLength", default)]
    pub from_length: Option<f64>,
    #[serde(rename = "toLength", default)]
    pub to_length: Option<f64>,
    #[serde(rename = "measureUnitWeightId", default)]
    pub measure_unit_weight_id: Option<i64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(rename = "packingRuleId", default)]
    pub packing_rule_id: Option<i64>,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(rename = "descriptionEn", default)]
    pub description_en: Option<String>,
    #[serde(rename = "descriptionRu", default)]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub colors: Vec<ColorVariantDto>,
}

/// Row of `GET /api/products`; also what the list hands to the edit dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItem {
    #[serde(rename = "productGroupId")]
    pub product_group_id: ProductGroupId,
    #[serde(rename = "productNameEn", default)]
    pub product_name_en: String,
    #[serde(rename = "productNameRu", default)]
    pub product_name_ru: String,
    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "productTypeName", default)]
    pub product_type_name: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
