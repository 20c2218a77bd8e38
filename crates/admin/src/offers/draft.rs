//! The in-progress offer, as a tagged union.
//!
//! The persisted record represents its kind as a flag plus a pile of
//! optional fields; the draft instead tags the variant so illegal field
//! combinations are unrepresentable. Shared fields (vendor, names,
//! descriptions, dates, image) survive a kind switch; the fields
//! exclusive to the previous kind do not.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use souq_core::{OfferId, ProductId, VendorId};

use super::normalize::DiscountType;
use crate::platform::{LocalImage, Offer, OfferKind};

/// A product picked in the offer dialog, with the reference price taken
/// from the per-vendor product list. `price` is `None` while the list is
/// still loading or the product's price is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    pub id: ProductId,
    pub price: Option<Decimal>,
}

/// An ordered set of package products, keyed by product id.
///
/// Insertion order is what the dialog shows; membership checks are O(1)
/// so insert/remove idempotence does not rely on linear scans.
#[derive(Debug, Clone, Default)]
pub struct SelectedProducts {
    order: Vec<ProductId>,
    members: HashSet<ProductId>,
}

impl SelectedProducts {
    /// Add a product. A no-op returning `false` when already present.
    pub fn insert(&mut self, id: ProductId) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        self.members.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Remove a product. A no-op returning `false` for non-members.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|p| p != id);
        true
    }

    /// Drop every product.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.order.iter()
    }

    /// Products in insertion order, cloned for a payload.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ProductId> {
        self.order.clone()
    }
}

impl FromIterator<ProductId> for SelectedProducts {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut set = Self::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Where the offer image currently lives.
#[derive(Debug, Clone, Default)]
pub enum ImageSource {
    /// No image attached.
    #[default]
    None,
    /// Already stored remotely; submit as-is.
    Remote(String),
    /// Attached in the dialog but not yet uploaded.
    Pending(LocalImage),
}

impl ImageSource {
    /// The remote URL, when the image is already stored.
    #[must_use]
    pub fn as_remote_url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => Some(url),
            Self::None | Self::Pending(_) => None,
        }
    }

    /// Whether any image is attached at all.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The fields owned by the selected offer kind.
#[derive(Debug, Clone)]
pub enum KindFields {
    /// One product at a percentage or fixed discount.
    Single {
        product: Option<ProductSelection>,
        discount_type: DiscountType,
        discount_input: String,
    },
    /// A bundle of products at one absolute price. No discount fields -
    /// the price is absolute, not a discount off anything.
    Package {
        products: SelectedProducts,
        bundle_price_input: String,
    },
    /// Storewide delivery-fee discount. Unnamed, imageless.
    Delivery {
        discount_type: DiscountType,
        discount_input: String,
    },
}

impl KindFields {
    /// Fresh, empty fields for a kind.
    #[must_use]
    pub fn empty(kind: OfferKind) -> Self {
        match kind {
            OfferKind::Single => Self::Single {
                product: None,
                discount_type: DiscountType::Percentage,
                discount_input: String::new(),
            },
            OfferKind::Package => Self::Package {
                products: SelectedProducts::default(),
                bundle_price_input: String::new(),
            },
            OfferKind::Delivery => Self::Delivery {
                discount_type: DiscountType::Percentage,
                discount_input: String::new(),
            },
        }
    }

    /// The kind tag of these fields.
    #[must_use]
    pub const fn kind(&self) -> OfferKind {
        match self {
            Self::Single { .. } => OfferKind::Single,
            Self::Package { .. } => OfferKind::Package,
            Self::Delivery { .. } => OfferKind::Delivery,
        }
    }
}

/// The transient, client-side state of an offer being created or edited.
///
/// One draft exists per open dialog; it is built from the dialog's form
/// on every save and discarded afterwards. It never persists locally.
#[derive(Debug, Clone)]
pub struct OfferDraft {
    /// Set when editing an existing offer.
    pub offer_id: Option<OfferId>,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub image: ImageSource,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    vendor_id: Option<VendorId>,
    kind: KindFields,
}

impl OfferDraft {
    /// Create an empty draft for a kind (the Add dialog).
    #[must_use]
    pub fn new(kind: OfferKind) -> Self {
        Self {
            offer_id: None,
            name_ar: String::new(),
            name_en: String::new(),
            description_ar: String::new(),
            description_en: String::new(),
            image: ImageSource::None,
            start_date: None,
            end_date: None,
            vendor_id: None,
            kind: KindFields::empty(kind),
        }
    }

    /// Hydrate a draft from a persisted offer (the Edit dialog).
    ///
    /// `reference_price` is the current price of the referenced product,
    /// when the per-vendor list has resolved it.
    #[must_use]
    pub fn from_offer(offer: &Offer, reference_price: Option<Decimal>) -> Self {
        let kind = Self::infer_kind(offer);
        let fields = match kind {
            OfferKind::Single => KindFields::Single {
                product: offer.product.clone().map(|id| ProductSelection {
                    id,
                    price: reference_price,
                }),
                discount_type: DiscountType::Percentage,
                discount_input: offer.discount.map(|d| d.to_string()).unwrap_or_default(),
            },
            OfferKind::Package => KindFields::Package {
                products: offer.products.iter().cloned().collect(),
                bundle_price_input: offer.price.map(|p| p.to_string()).unwrap_or_default(),
            },
            OfferKind::Delivery => KindFields::Delivery {
                discount_type: DiscountType::Percentage,
                discount_input: offer.discount.map(|d| d.to_string()).unwrap_or_default(),
            },
        };

        Self {
            offer_id: Some(offer.id.clone()),
            name_ar: offer.name_ar.clone(),
            name_en: offer.name_en.clone(),
            description_ar: offer.description_ar.clone(),
            description_en: offer.description_en.clone(),
            image: if offer.image.is_empty() {
                ImageSource::None
            } else {
                ImageSource::Remote(offer.image.clone())
            },
            start_date: offer.start_date.as_deref().and_then(parse_wire_date),
            end_date: offer.end_date.as_deref().and_then(parse_wire_date),
            vendor_id: Some(offer.shop_id.clone()),
            kind: fields,
        }
    }

    /// Best-effort kind for a record, inferring from populated fields
    /// when it predates an explicit kind.
    ///
    /// Kept for compatibility with legacy records; an explicit kind on
    /// the wire always wins.
    #[must_use]
    pub fn infer_kind(offer: &Offer) -> OfferKind {
        offer.kind.unwrap_or({
            if !offer.products.is_empty() {
                OfferKind::Package
            } else if offer.product.as_ref().is_some_and(|p| !p.is_empty()) {
                OfferKind::Single
            } else {
                OfferKind::Delivery
            }
        })
    }

    /// The currently selected kind.
    #[must_use]
    pub const fn kind(&self) -> OfferKind {
        self.kind.kind()
    }

    /// The kind-owned fields.
    #[must_use]
    pub const fn fields(&self) -> &KindFields {
        &self.kind
    }

    /// The owning vendor.
    #[must_use]
    pub const fn vendor_id(&self) -> Option<&VendorId> {
        self.vendor_id.as_ref()
    }

    /// Switch the offer kind.
    ///
    /// Shared fields survive; the fields exclusive to the previous kind
    /// are invalidated so they can never leak into the new payload.
    pub fn set_kind(&mut self, kind: OfferKind) {
        if self.kind.kind() != kind {
            self.kind = KindFields::empty(kind);
        }
    }

    /// Select the owning vendor.
    ///
    /// Changing vendor always resets the product selection - a product
    /// reference from another vendor is never retained.
    pub fn set_vendor(&mut self, vendor: Option<VendorId>) {
        if self.vendor_id == vendor {
            return;
        }
        self.vendor_id = vendor;
        match &mut self.kind {
            KindFields::Single { product, .. } => *product = None,
            KindFields::Package { products, .. } => products.clear(),
            KindFields::Delivery { .. } => {}
        }
    }

    /// Set the date range.
    pub const fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
    }

    /// Pick the referenced product (single offers only).
    pub fn select_product(&mut self, selection: ProductSelection) {
        if let KindFields::Single { product, .. } = &mut self.kind {
            *product = Some(selection);
        }
    }

    /// Set the discount representation and raw input (single/delivery).
    pub fn set_discount(&mut self, ty: DiscountType, input: impl Into<String>) {
        match &mut self.kind {
            KindFields::Single {
                discount_type,
                discount_input,
                ..
            }
            | KindFields::Delivery {
                discount_type,
                discount_input,
            } => {
                *discount_type = ty;
                *discount_input = input.into();
            }
            KindFields::Package { .. } => {}
        }
    }

    /// Set the raw bundle price input (package offers only).
    pub fn set_bundle_price(&mut self, input: impl Into<String>) {
        if let KindFields::Package {
            bundle_price_input, ..
        } = &mut self.kind
        {
            *bundle_price_input = input.into();
        }
    }

    /// Add a product to the package working set. Idempotent by id.
    pub fn add_product(&mut self, id: ProductId) -> bool {
        match &mut self.kind {
            KindFields::Package { products, .. } => products.insert(id),
            KindFields::Single { .. } | KindFields::Delivery { .. } => false,
        }
    }

    /// Remove a product from the package working set. Idempotent.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        match &mut self.kind {
            KindFields::Package { products, .. } => products.remove(id),
            KindFields::Single { .. } | KindFields::Delivery { .. } => false,
        }
    }

    /// The reference price of the selected product, when known.
    #[must_use]
    pub fn reference_price(&self) -> Option<Decimal> {
        match &self.kind {
            KindFields::Single { product, .. } => product.as_ref().and_then(|p| p.price),
            KindFields::Package { .. } | KindFields::Delivery { .. } => None,
        }
    }
}

/// Parse the date part of a wire datetime string.
fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use souq_core::VendorId;

    fn sample_offer(json: &str) -> Offer {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_package_membership_is_idempotent() {
        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.set_vendor(Some(VendorId::new("v-1")));

        assert!(draft.add_product(ProductId::new("p-1")));
        assert!(!draft.add_product(ProductId::new("p-1")));
        assert!(draft.add_product(ProductId::new("p-2")));

        let KindFields::Package { products, .. } = draft.fields() else {
            panic!("expected package fields");
        };
        assert_eq!(products.len(), 2);

        // Removing a non-member is a no-op
        assert!(!draft.remove_product(&ProductId::new("p-9")));
        assert!(draft.remove_product(&ProductId::new("p-1")));
        assert!(!draft.remove_product(&ProductId::new("p-1")));
    }

    #[test]
    fn test_selected_products_preserve_order() {
        let mut set = SelectedProducts::default();
        set.insert(ProductId::new("b"));
        set.insert(ProductId::new("a"));
        set.insert(ProductId::new("c"));
        set.remove(&ProductId::new("a"));

        let ids: Vec<_> = set.iter().map(ProductId::as_str).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn test_vendor_switch_resets_dependent_state() {
        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.add_product(ProductId::new("p-1"));
        draft.add_product(ProductId::new("p-2"));

        draft.set_vendor(Some(VendorId::new("v-2")));
        let KindFields::Package { products, .. } = draft.fields() else {
            panic!("expected package fields");
        };
        assert!(products.is_empty());

        let mut draft = OfferDraft::new(OfferKind::Single);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.select_product(ProductSelection {
            id: ProductId::new("p-1"),
            price: Some(Decimal::new(200, 0)),
        });
        draft.set_vendor(Some(VendorId::new("v-2")));
        let KindFields::Single { product, .. } = draft.fields() else {
            panic!("expected single fields");
        };
        assert!(product.is_none());
    }

    #[test]
    fn test_same_vendor_keeps_selection() {
        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.add_product(ProductId::new("p-1"));

        draft.set_vendor(Some(VendorId::new("v-1")));
        let KindFields::Package { products, .. } = draft.fields() else {
            panic!("expected package fields");
        };
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_kind_switch_preserves_shared_fields() {
        let mut draft = OfferDraft::new(OfferKind::Single);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.name_ar = "عرض".to_string();
        draft.set_discount(DiscountType::Fixed, "30");

        draft.set_kind(OfferKind::Delivery);
        assert_eq!(draft.vendor_id(), Some(&VendorId::new("v-1")));
        assert_eq!(draft.name_ar, "عرض");

        // The new kind starts with fresh fields, not the old discount
        let KindFields::Delivery {
            discount_type,
            discount_input,
        } = draft.fields()
        else {
            panic!("expected delivery fields");
        };
        assert_eq!(*discount_type, DiscountType::Percentage);
        assert!(discount_input.is_empty());
    }

    #[test]
    fn test_kind_inference_for_legacy_records() {
        let offer = sample_offer(r#"{"id":"o-1","shopId":"v-1","products":["p1","p2"]}"#);
        assert_eq!(OfferDraft::infer_kind(&offer), OfferKind::Package);

        let offer = sample_offer(r#"{"id":"o-2","shopId":"v-1","product":"p1"}"#);
        assert_eq!(OfferDraft::infer_kind(&offer), OfferKind::Single);

        let offer = sample_offer(r#"{"id":"o-3","shopId":"v-1","discount":"10"}"#);
        assert_eq!(OfferDraft::infer_kind(&offer), OfferKind::Delivery);

        // An explicit kind always wins over the heuristic
        let offer =
            sample_offer(r#"{"id":"o-4","kind":"SINGLE","shopId":"v-1","products":["p1"]}"#);
        assert_eq!(OfferDraft::infer_kind(&offer), OfferKind::Single);
    }

    #[test]
    fn test_hydration_from_persisted_package() {
        let offer = sample_offer(
            r#"{"id":"o-1","shopId":"v-1","nameAr":"وجبة","products":["p1","p2"],
                "price":"50.00","image":"https://cdn.example/x.png",
                "startDate":"2024-01-01T00:00:00.000","endDate":"2024-01-31T23:59:59.999"}"#,
        );
        let draft = OfferDraft::from_offer(&offer, None);

        assert_eq!(draft.kind(), OfferKind::Package);
        assert_eq!(draft.offer_id, Some(OfferId::new("o-1")));
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert!(matches!(draft.image, ImageSource::Remote(_)));

        let KindFields::Package {
            products,
            bundle_price_input,
        } = draft.fields()
        else {
            panic!("expected package fields");
        };
        assert_eq!(products.len(), 2);
        assert_eq!(bundle_price_input, "50.00");
    }
}
