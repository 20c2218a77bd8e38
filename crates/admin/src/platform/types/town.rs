//! Town domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use souq_core::TownId;

/// A town the platform delivers in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Town {
    /// Town ID.
    pub id: TownId,
    /// Arabic name.
    #[serde(default)]
    pub name_ar: String,
    /// English name.
    #[serde(default)]
    pub name_en: String,
    /// Flat delivery fee for the town.
    #[serde(default)]
    pub delivery_fee: Option<Decimal>,
}

/// Create/update payload for a town.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TownPayload {
    pub name_ar: String,
    pub name_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
}
