use serde::{Deserialize, Serialize};

/// Enabled color (`GET /api/colors/enabled`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub color_id: i64,
    pub color_name: String,
}
