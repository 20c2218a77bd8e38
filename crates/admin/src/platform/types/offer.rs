//! Offer domain and wire types.
//!
//! Three offer kinds exist on the platform: a single-product discount, a
//! multi-product package at an absolute bundle price, and a storewide
//! delivery-fee discount. The server stores one canonical discount
//! representation - a percentage - regardless of how the admin edited it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use souq_core::{OfferId, ProductId, VendorId};

/// Offer kind. Selects which payload shape the offer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferKind {
    /// One product at a discounted price.
    Single,
    /// A bundle of products at one absolute price.
    Package,
    /// Storewide delivery-fee discount.
    Delivery,
}

impl OfferKind {
    /// Parse a kind from a URL/form parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "package" => Some(Self::Package),
            "delivery" => Some(Self::Delivery),
            _ => None,
        }
    }

    /// Get the URL/form parameter string for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Package => "package",
            Self::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for OfferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single product"),
            Self::Package => write!(f, "Package"),
            Self::Delivery => write!(f, "Delivery"),
        }
    }
}

/// A persisted offer record.
///
/// Records created before the platform stored an explicit `kind` leave it
/// unset; the console infers the kind from which fields are populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Offer ID.
    pub id: OfferId,
    /// Explicit kind, absent on legacy records.
    #[serde(default)]
    pub kind: Option<OfferKind>,
    /// Arabic display name.
    #[serde(default)]
    pub name_ar: String,
    /// English display name (falls back to Arabic when empty).
    #[serde(default)]
    pub name_en: String,
    /// Arabic description.
    #[serde(default)]
    pub description_ar: String,
    /// English description.
    #[serde(default)]
    pub description_en: String,
    /// Owning vendor.
    pub shop_id: VendorId,
    /// Image URL (empty for delivery offers).
    #[serde(default)]
    pub image: String,
    /// Referenced product (single offers).
    #[serde(default)]
    pub product: Option<ProductId>,
    /// Bundled products (package offers).
    #[serde(default)]
    pub products: Vec<ProductId>,
    /// Absolute bundle price (package offers).
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Canonical discount percentage (single and delivery offers).
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// Offer start, ISO 8601.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Offer end, ISO 8601, normalized to end-of-day.
    #[serde(default)]
    pub end_date: Option<String>,
}

// =============================================================================
// Create/update payloads
// =============================================================================

/// Creation payload for a single-product offer (POST `/offers`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleOfferPayload {
    pub name_ar: String,
    pub name_en: String,
    pub product: ProductId,
    pub image: String,
    pub description_ar: String,
    pub description_en: String,
    /// Canonical percentage, regardless of the edited representation.
    pub discount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub shop_id: VendorId,
}

/// Creation payload for a package offer (POST `/offers/package`).
///
/// Packages carry an absolute `price` and a `products` list in place of
/// `product`/`discount`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOfferPayload {
    pub name_ar: String,
    pub name_en: String,
    pub price: Decimal,
    pub image: String,
    pub description_ar: String,
    pub description_en: String,
    pub products: Vec<ProductId>,
    pub start_date: String,
    pub end_date: String,
    pub shop_id: VendorId,
}

/// Creation payload for a delivery offer (POST `/offers/delivery`).
///
/// Delivery offers are unnamed storewide perks: no name, no image, no
/// product reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOfferPayload {
    pub description_ar: String,
    pub description_en: String,
    /// Canonical percentage off the delivery fee.
    pub discount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub shop_id: VendorId,
}

/// The resolved payload for one offer submission.
///
/// Creation is kind-split at the transport layer (three endpoints);
/// updates share one endpoint but keep the variant-dependent field set.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OfferPayload {
    Single(SingleOfferPayload),
    Package(PackageOfferPayload),
    Delivery(DeliveryOfferPayload),
}

impl OfferPayload {
    /// The kind this payload was resolved for.
    #[must_use]
    pub const fn kind(&self) -> OfferKind {
        match self {
            Self::Single(_) => OfferKind::Single,
            Self::Package(_) => OfferKind::Package,
            Self::Delivery(_) => OfferKind::Delivery,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_kind_param_roundtrip() {
        for kind in [OfferKind::Single, OfferKind::Package, OfferKind::Delivery] {
            assert_eq!(OfferKind::from_str_param(kind.as_str()), Some(kind));
        }
        assert_eq!(OfferKind::from_str_param("bogus"), None);
    }

    #[test]
    fn test_single_payload_wire_casing() {
        let payload = SingleOfferPayload {
            name_ar: "خصم".to_string(),
            name_en: "Deal".to_string(),
            product: ProductId::new("p-1"),
            image: "https://cdn.example/img.png".to_string(),
            description_ar: String::new(),
            description_en: String::new(),
            discount: Decimal::new(2550, 2),
            start_date: "2024-01-01T00:00:00.000".to_string(),
            end_date: "2024-01-31T23:59:59.999".to_string(),
            shop_id: VendorId::new("v-1"),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nameAr"], "خصم");
        assert_eq!(json["product"], "p-1");
        assert_eq!(json["discount"], "25.50");
        assert_eq!(json["startDate"], "2024-01-01T00:00:00.000");
        assert_eq!(json["shopId"], "v-1");
    }

    #[test]
    fn test_package_payload_uses_price_and_products() {
        let payload = PackageOfferPayload {
            name_ar: "وجبة".to_string(),
            name_en: "Meal".to_string(),
            price: Decimal::new(5000, 2),
            image: "https://cdn.example/img.png".to_string(),
            description_ar: String::new(),
            description_en: String::new(),
            products: vec![ProductId::new("p-1"), ProductId::new("p-2")],
            start_date: "2024-01-01T00:00:00.000".to_string(),
            end_date: "2024-01-31T23:59:59.999".to_string(),
            shop_id: VendorId::new("v-1"),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], "50.00");
        assert_eq!(json["products"], serde_json::json!(["p-1", "p-2"]));
        assert!(json.get("product").is_none());
        assert!(json.get("discount").is_none());
    }

    #[test]
    fn test_legacy_offer_record_without_kind() {
        let offer: Offer = serde_json::from_str(
            r#"{"id":"o-1","shopId":"v-1","products":["p-1","p-2"],"price":"50.00"}"#,
        )
        .unwrap();
        assert!(offer.kind.is_none());
        assert_eq!(offer.products.len(), 2);
    }
}
