//! Product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use souq_core::{CategoryId, ProductId, VendorId};

/// A product as listed by the platform API.
///
/// `price` is the reference price the offer engine uses to bound fixed
/// discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Arabic display name.
    #[serde(default)]
    pub name_ar: String,
    /// English display name.
    #[serde(default)]
    pub name_en: String,
    /// Current price.
    pub price: Decimal,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Owning vendor.
    pub shop_id: VendorId,
    /// Category, when assigned.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Whether the product is currently orderable.
    #[serde(default = "default_true")]
    pub available: bool,
}

const fn default_true() -> bool {
    true
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name_ar: String,
    pub name_en: String,
    pub price: Decimal,
    pub image: String,
    pub shop_id: VendorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub available: bool,
}
