//! Vendor (store) domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use souq_core::{TownId, VendorId};

/// A vendor (store) on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Vendor ID.
    pub id: VendorId,
    /// Arabic display name.
    #[serde(default)]
    pub name_ar: String,
    /// English display name.
    #[serde(default)]
    pub name_en: String,
    /// Logo/cover image URL.
    #[serde(default)]
    pub image: String,
    /// Town the vendor operates in.
    #[serde(default)]
    pub town_id: Option<TownId>,
    /// Contact mobile number.
    #[serde(default)]
    pub mobile: String,
    /// Base delivery fee charged by the vendor.
    #[serde(default)]
    pub delivery_fee: Option<Decimal>,
    /// Whether the vendor is currently accepting orders.
    #[serde(default)]
    pub open: bool,
}

/// Create/update payload for a vendor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPayload {
    pub name_ar: String,
    pub name_en: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_id: Option<TownId>,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
}
