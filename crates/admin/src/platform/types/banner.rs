//! Promotional banner domain types.

use serde::{Deserialize, Serialize};
use souq_core::{BannerId, PublishStatus, VendorId};

/// A storefront banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Banner ID.
    pub id: BannerId,
    /// Image URL.
    pub image: String,
    /// Vendor the banner links to, when any.
    #[serde(default)]
    pub shop_id: Option<VendorId>,
    /// Publication state.
    #[serde(default)]
    pub status: PublishStatus,
}

/// Create/update payload for a banner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPayload {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<VendorId>,
    pub status: PublishStatus,
}
