//! Variant-specific required fields and payload assembly.
//!
//! One exhaustive match per concern, keyed on the draft's kind tag:
//! which fields must be present, and which payload shape to build. The
//! canonical discount conversion happens here, once, at the boundary -
//! the dialogs never deal in two representations past this point.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use super::OfferFormError;
use super::draft::{KindFields, OfferDraft};
use super::normalize::{self, DiscountType};
use crate::platform::{
    DeliveryOfferPayload, OfferPayload, PackageOfferPayload, SingleOfferPayload,
};

/// Wire datetime format; millisecond precision to carry the end-of-day
/// 23:59:59.999 normalization.
const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Check the variant-specific required fields.
///
/// The field sets come straight from the offer shapes: a delivery offer
/// is an unnamed storewide perk, so an empty name never blocks it; a
/// single offer without a product reference always does.
///
/// # Errors
///
/// Returns the first missing-field error in display order.
pub fn check_required(draft: &OfferDraft) -> Result<(), OfferFormError> {
    match draft.fields() {
        KindFields::Single { product, .. } => {
            if draft.name_ar.trim().is_empty() {
                return Err(OfferFormError::MissingField("name"));
            }
            if draft.vendor_id().is_none() {
                return Err(OfferFormError::MissingField("vendor"));
            }
            if !product.as_ref().is_some_and(|p| !p.id.is_empty()) {
                return Err(OfferFormError::MissingField("product"));
            }
            check_dates(draft)?;
            if !draft.image.is_attached() {
                return Err(OfferFormError::MissingField("image"));
            }
        }
        KindFields::Package {
            products,
            bundle_price_input,
        } => {
            if draft.vendor_id().is_none() {
                return Err(OfferFormError::MissingField("vendor"));
            }
            if products.is_empty() {
                return Err(OfferFormError::EmptyPackage);
            }
            if normalize::parse_amount(bundle_price_input) <= Decimal::ZERO {
                return Err(OfferFormError::MissingField("bundle price"));
            }
            check_dates(draft)?;
            if !draft.image.is_attached() {
                return Err(OfferFormError::MissingField("image"));
            }
        }
        KindFields::Delivery { discount_input, .. } => {
            if draft.vendor_id().is_none() {
                return Err(OfferFormError::MissingField("vendor"));
            }
            if discount_input.trim().is_empty() {
                return Err(OfferFormError::MissingField("discount"));
            }
            check_dates(draft)?;
        }
    }
    Ok(())
}

/// Both dates present and in order.
fn check_dates(draft: &OfferDraft) -> Result<(), OfferFormError> {
    let start = draft
        .start_date
        .ok_or(OfferFormError::MissingField("start date"))?;
    let end = draft
        .end_date
        .ok_or(OfferFormError::MissingField("end date"))?;
    if end < start {
        return Err(OfferFormError::InvalidDateRange);
    }
    Ok(())
}

/// Assemble the canonical payload for the draft's kind.
///
/// `image_url` is the stored image location: the pre-existing remote URL
/// or the one the orchestrator just got back from the upload step.
/// Callers run [`check_required`] first; this still re-checks what it
/// needs to stay total.
///
/// # Errors
///
/// Returns `MissingReferencePrice` when a fixed discount cannot be
/// converted, and missing-field errors for payload inputs that have no
/// valid value.
pub fn build_payload(
    draft: &OfferDraft,
    image_url: Option<String>,
) -> Result<OfferPayload, OfferFormError> {
    let shop_id = draft
        .vendor_id()
        .cloned()
        .ok_or(OfferFormError::MissingField("vendor"))?;
    let (start_date, end_date) = payload_dates(draft)?;

    // English fields fall back to the Arabic value at the boundary
    let name_ar = draft.name_ar.trim().to_string();
    let name_en = fallback(&draft.name_en, &name_ar);
    let description_ar = draft.description_ar.trim().to_string();
    let description_en = fallback(&draft.description_en, &description_ar);

    let payload = match draft.fields() {
        KindFields::Single {
            product,
            discount_type,
            discount_input,
        } => {
            let product = product
                .as_ref()
                .filter(|p| !p.id.is_empty())
                .ok_or(OfferFormError::MissingField("product"))?;
            let discount =
                canonical_discount(*discount_type, discount_input, product.price)?;
            OfferPayload::Single(SingleOfferPayload {
                name_ar,
                name_en,
                product: product.id.clone(),
                image: image_url.ok_or(OfferFormError::MissingField("image"))?,
                description_ar,
                description_en,
                discount,
                start_date,
                end_date,
                shop_id,
            })
        }
        KindFields::Package {
            products,
            bundle_price_input,
        } => {
            if products.is_empty() {
                return Err(OfferFormError::EmptyPackage);
            }
            let price = normalize::parse_amount(bundle_price_input);
            if price <= Decimal::ZERO {
                return Err(OfferFormError::MissingField("bundle price"));
            }
            OfferPayload::Package(PackageOfferPayload {
                name_ar,
                name_en,
                price: price.round_dp(2),
                image: image_url.ok_or(OfferFormError::MissingField("image"))?,
                description_ar,
                description_en,
                products: products.to_vec(),
                start_date,
                end_date,
                shop_id,
            })
        }
        KindFields::Delivery {
            discount_type,
            discount_input,
        } => {
            // No product, so a fixed amount has nothing to convert
            // against; only the percentage representation can reach the
            // wire. See check in canonical_discount.
            let discount = canonical_discount(*discount_type, discount_input, None)?;
            OfferPayload::Delivery(DeliveryOfferPayload {
                description_ar,
                description_en,
                discount,
                start_date,
                end_date,
                shop_id,
            })
        }
    };

    Ok(payload)
}

/// Normalize the edited discount and convert it to the canonical
/// percentage.
///
/// # Errors
///
/// Returns `MissingReferencePrice` for a fixed discount without a known
/// positive reference price - never NaN or infinity on the wire.
fn canonical_discount(
    discount_type: DiscountType,
    raw: &str,
    reference_price: Option<Decimal>,
) -> Result<Decimal, OfferFormError> {
    match discount_type {
        DiscountType::Percentage => Ok(normalize::normalize(discount_type, raw, None)),
        DiscountType::Fixed => {
            let price = reference_price
                .filter(|p| *p > Decimal::ZERO)
                .ok_or(OfferFormError::MissingReferencePrice)?;
            let fixed = normalize::normalize(discount_type, raw, Some(price));
            normalize::percentage_from_fixed(fixed, price)
                .ok_or(OfferFormError::MissingReferencePrice)
        }
    }
}

/// Wire strings for the date range: start at midnight, end normalized to
/// end-of-day so a single-day offer spans the whole day.
fn payload_dates(draft: &OfferDraft) -> Result<(String, String), OfferFormError> {
    let start = draft
        .start_date
        .ok_or(OfferFormError::MissingField("start date"))?;
    let end = draft
        .end_date
        .ok_or(OfferFormError::MissingField("end date"))?;
    if end < start {
        return Err(OfferFormError::InvalidDateRange);
    }

    Ok((
        format_wire(start.and_time(NaiveTime::MIN)),
        format_wire(end_of_day(end)),
    ))
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

fn format_wire(dt: NaiveDateTime) -> String {
    dt.format(WIRE_DATETIME_FORMAT).to_string()
}

fn fallback(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::offers::draft::{ImageSource, ProductSelection};
    use crate::platform::OfferKind;
    use souq_core::{ProductId, VendorId};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn dated(mut draft: OfferDraft) -> OfferDraft {
        draft.set_dates(
            NaiveDate::from_ymd_opt(2024, 1, 10),
            NaiveDate::from_ymd_opt(2024, 1, 20),
        );
        draft
    }

    fn single_draft() -> OfferDraft {
        let mut draft = OfferDraft::new(OfferKind::Single);
        draft.name_ar = "خصم الشاورما".to_string();
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.select_product(ProductSelection {
            id: ProductId::new("p-1"),
            price: Some(dec("200")),
        });
        draft.set_discount(DiscountType::Percentage, "25");
        draft.image = ImageSource::Remote("https://cdn.example/x.png".into());
        dated(draft)
    }

    #[test]
    fn test_delivery_does_not_require_name() {
        let mut draft = OfferDraft::new(OfferKind::Delivery);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_discount(DiscountType::Percentage, "15");
        let draft = dated(draft);

        assert!(draft.name_ar.is_empty());
        assert_eq!(check_required(&draft), Ok(()));
    }

    #[test]
    fn test_single_requires_product() {
        let mut draft = OfferDraft::new(OfferKind::Single);
        draft.name_ar = "عرض".to_string();
        draft.set_vendor(Some(VendorId::new("v-1")));
        let draft = dated(draft);

        assert_eq!(
            check_required(&draft),
            Err(OfferFormError::MissingField("product"))
        );
    }

    #[test]
    fn test_empty_package_halts() {
        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_bundle_price("50");
        let draft = dated(draft);

        assert_eq!(check_required(&draft), Err(OfferFormError::EmptyPackage));
    }

    #[test]
    fn test_date_range_order() {
        let mut draft = OfferDraft::new(OfferKind::Delivery);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_discount(DiscountType::Percentage, "15");
        draft.set_dates(
            NaiveDate::from_ymd_opt(2024, 1, 20),
            NaiveDate::from_ymd_opt(2024, 1, 10),
        );

        assert_eq!(check_required(&draft), Err(OfferFormError::InvalidDateRange));
    }

    #[test]
    fn test_end_date_normalized_to_end_of_day() {
        let mut draft = OfferDraft::new(OfferKind::Delivery);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_discount(DiscountType::Percentage, "15");
        draft.set_dates(
            NaiveDate::from_ymd_opt(2024, 1, 10),
            NaiveDate::from_ymd_opt(2024, 1, 10),
        );

        let OfferPayload::Delivery(payload) = build_payload(&draft, None).unwrap() else {
            panic!("expected delivery payload");
        };
        assert_eq!(payload.start_date, "2024-01-10T00:00:00.000");
        assert_eq!(payload.end_date, "2024-01-10T23:59:59.999");
    }

    #[test]
    fn test_single_payload_canonicalizes_fixed_discount() {
        let mut draft = single_draft();
        draft.set_discount(DiscountType::Fixed, "500");

        let OfferPayload::Single(payload) = build_payload(&draft, Some("u".into())).unwrap()
        else {
            panic!("expected single payload");
        };
        // 500 clamps to 199 against the 200 reference, then converts
        assert_eq!(payload.discount, dec("99.50"));
    }

    #[test]
    fn test_fixed_discount_without_reference_price_blocks() {
        let mut draft = single_draft();
        draft.select_product(ProductSelection {
            id: ProductId::new("p-1"),
            price: None,
        });
        draft.set_discount(DiscountType::Fixed, "30");

        let err = build_payload(&draft, Some("u".into())).unwrap_err();
        assert_eq!(err, OfferFormError::MissingReferencePrice);
    }

    #[test]
    fn test_delivery_fixed_discount_blocks() {
        // Delivery offers have no reference price at all, so only the
        // percentage representation can be submitted.
        let mut draft = OfferDraft::new(OfferKind::Delivery);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_discount(DiscountType::Fixed, "10");
        let draft = dated(draft);

        let err = build_payload(&draft, None).unwrap_err();
        assert_eq!(err, OfferFormError::MissingReferencePrice);
    }

    #[test]
    fn test_english_fields_fall_back_to_arabic() {
        let draft = single_draft();
        let OfferPayload::Single(payload) = build_payload(&draft, Some("u".into())).unwrap()
        else {
            panic!("expected single payload");
        };
        assert_eq!(payload.name_en, payload.name_ar);
        assert_eq!(payload.name_ar, "خصم الشاورما");
    }

    #[test]
    fn test_package_payload_shape() {
        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.name_ar = "وجبة التوفير".to_string();
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.add_product(ProductId::new("p-1"));
        draft.add_product(ProductId::new("p-2"));
        draft.set_bundle_price("49.995");
        draft.image = ImageSource::Remote("https://cdn.example/x.png".into());
        let draft = dated(draft);

        let OfferPayload::Package(payload) =
            build_payload(&draft, Some("https://cdn.example/x.png".into())).unwrap()
        else {
            panic!("expected package payload");
        };
        assert_eq!(payload.price, dec("50.00"));
        assert_eq!(payload.products.len(), 2);
        assert_eq!(payload.shop_id, VendorId::new("v-1"));
    }
}
