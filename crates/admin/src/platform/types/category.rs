//! Category domain types.

use serde::{Deserialize, Serialize};
use souq_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Arabic name.
    #[serde(default)]
    pub name_ar: String,
    /// English name.
    #[serde(default)]
    pub name_en: String,
    /// Icon/image URL.
    #[serde(default)]
    pub image: String,
}

/// Create/update payload for a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name_ar: String,
    pub name_en: String,
    pub image: String,
}
