use serde::{Deserialize, Serialize};

/// Enabled product type of one category (`GET /api/product-types/enabled?categoryId=`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub product_type_id: i64,
    pub product_type_name: String,
}
