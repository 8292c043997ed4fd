use serde::{Deserialize, Serialize};

/// Enabled category as returned by `GET /api/categories/enabled`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}
