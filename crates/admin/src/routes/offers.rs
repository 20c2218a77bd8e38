//! Offer route handlers: the dialogs' save path into the engine.
//!
//! Create and update accept multipart (text fields plus an optional
//! image file) so the submission orchestrator - not the dialog - owns
//! the upload step. Deletion dispatches on the kind the listing row
//! already knows, honoring the platform's kind-split transport.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use souq_core::{OfferId, ProductId, VendorId};

use crate::{
    error::AppError,
    offers::{DiscountType, ImageSource, OfferDraft, ProductSelection},
    platform::{LocalImage, Offer, OfferKind, Page, Product, Vendor},
    state::AppState,
};

use super::{ListParams, Notification};

/// Response for a successful offer save: the notification plus the
/// record for the caller's refresh.
#[derive(Debug, Serialize)]
pub struct OfferSaved {
    pub notification: Notification,
    pub offer: Offer,
}

/// Offers listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Offer>>, AppError> {
    let page = state.platform().list_offers(params.page, params.q).await?;
    Ok(Json(page))
}

/// What the Edit dialog needs to hydrate: the record, the kind the
/// console resolved for it (inferred for legacy records), and the
/// current reference price when one product is referenced.
#[derive(Debug, Serialize)]
pub struct OfferEditView {
    pub kind: OfferKind,
    pub offer: Offer,
    pub reference_price: Option<rust_decimal::Decimal>,
}

/// Offer detail handler, backing the Edit dialog.
#[instrument(skip(state), fields(offer_id = %id))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<OfferId>,
) -> Result<Json<OfferEditView>, AppError> {
    let offer = state.platform().get_offer(&id).await?;

    // Resolve the referenced product's current price for the dialog's
    // fixed-discount bound; unknown stays None and blocks fixed mode.
    let reference_price = match &offer.product {
        Some(product) if !product.is_empty() => {
            state
                .reference()
                .reference_price(state.platform(), &offer.shop_id, product)
                .await?
        }
        _ => None,
    };

    let draft = OfferDraft::from_offer(&offer, reference_price);
    Ok(Json(OfferEditView {
        kind: draft.kind(),
        reference_price: draft.reference_price(),
        offer,
    }))
}

/// Create-offer handler (the Add dialog's save).
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<OfferSaved>), AppError> {
    let form = OfferForm::read(multipart).await?;
    let draft = build_draft(&state, form, None).await?;

    let outcome = state.offers().submit(&draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(OfferSaved {
            notification: Notification::success("Saved", "Offer created"),
            offer: outcome.offer,
        }),
    ))
}

/// Update-offer handler (the Edit dialog's save).
#[instrument(skip(state, multipart), fields(offer_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<OfferId>,
    multipart: Multipart,
) -> Result<Json<OfferSaved>, AppError> {
    let form = OfferForm::read(multipart).await?;
    let draft = build_draft(&state, form, Some(id)).await?;

    let outcome = state.offers().submit(&draft).await?;
    Ok(Json(OfferSaved {
        notification: Notification::success("Saved", "Offer updated"),
        offer: outcome.offer,
    }))
}

/// Query parameters for the kind-split delete.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// Kind of the offer being deleted, from the listing row.
    pub kind: String,
}

/// Delete-offer handler.
#[instrument(skip(state), fields(offer_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<OfferId>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Notification>, AppError> {
    let kind = OfferKind::from_str_param(&params.kind)
        .ok_or_else(|| AppError::BadRequest(format!("unknown offer kind '{}'", params.kind)))?;

    state.platform().delete_offer(&id, kind).await?;
    Ok(Json(Notification::success("Deleted", "Offer deleted")))
}

/// Vendor option list for the offer dialogs.
#[instrument(skip(state))]
pub async fn vendor_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vendor>>, AppError> {
    let vendors = state.reference().vendors(state.platform()).await?;
    Ok(Json(vendors.as_ref().clone()))
}

/// Query parameters for the product option list.
#[derive(Debug, Deserialize)]
pub struct ProductOptionsParams {
    pub vendor_id: VendorId,
    /// Force a refetch (the dialog re-opened after a catalog change).
    #[serde(default)]
    pub refresh: bool,
}

/// Product options for one vendor.
///
/// This is the candidate list a vendor change invalidates: the dialog
/// requests it again keyed by the new vendor and the old list is never
/// reused.
#[instrument(skip(state), fields(vendor_id = %params.vendor_id))]
pub async fn product_options(
    State(state): State<AppState>,
    Query(params): Query<ProductOptionsParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    if params.refresh {
        state.reference().invalidate_products(&params.vendor_id).await;
    }
    let products = state
        .reference()
        .products_for(state.platform(), &params.vendor_id)
        .await?;
    Ok(Json(products.as_ref().clone()))
}

// =============================================================================
// Multipart form -> draft
// =============================================================================

/// The raw dialog form, as received over multipart.
#[derive(Debug, Default)]
struct OfferForm {
    kind: Option<String>,
    name_ar: String,
    name_en: String,
    description_ar: String,
    description_en: String,
    vendor_id: Option<String>,
    product_id: Option<String>,
    product_ids: Vec<String>,
    bundle_price: Option<String>,
    discount_type: Option<String>,
    discount_value: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    image: Option<LocalImage>,
    image_url: Option<String>,
}

impl OfferForm {
    /// Drain the multipart stream into the form.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("malformed form: {e}")))?
        {
            let Some(name) = field.name().map(ToString::to_string) else {
                continue;
            };

            if name == "image" {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("unreadable image: {e}")))?;
                // An empty file part means "no image chosen"
                if !bytes.is_empty() {
                    form.image = Some(LocalImage {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("unreadable field {name}: {e}")))?;

            match name.as_str() {
                "kind" => form.kind = Some(value),
                "name_ar" => form.name_ar = value,
                "name_en" => form.name_en = value,
                "description_ar" => form.description_ar = value,
                "description_en" => form.description_en = value,
                "vendor_id" => form.vendor_id = some_nonempty(value),
                "product_id" => form.product_id = some_nonempty(value),
                "product_ids" => {
                    if !value.is_empty() {
                        form.product_ids.push(value);
                    }
                }
                "bundle_price" => form.bundle_price = Some(value),
                "discount_type" => form.discount_type = Some(value),
                "discount_value" => form.discount_value = Some(value),
                "start_date" => form.start_date = some_nonempty(value),
                "end_date" => form.end_date = some_nonempty(value),
                "image_url" => form.image_url = some_nonempty(value),
                _ => {}
            }
        }

        Ok(form)
    }
}

fn some_nonempty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Build the draft the engine consumes, resolving the reference price
/// of a selected product from the per-vendor list.
async fn build_draft(
    state: &AppState,
    form: OfferForm,
    offer_id: Option<OfferId>,
) -> Result<OfferDraft, AppError> {
    let kind = form
        .kind
        .as_deref()
        .and_then(OfferKind::from_str_param)
        .ok_or_else(|| AppError::BadRequest("missing or unknown offer kind".to_string()))?;

    let mut draft = OfferDraft::new(kind);
    draft.offer_id = offer_id;
    draft.name_ar = form.name_ar;
    draft.name_en = form.name_en;
    draft.description_ar = form.description_ar;
    draft.description_en = form.description_en;

    let vendor = form.vendor_id.map(VendorId::new);
    draft.set_vendor(vendor.clone());

    draft.set_dates(
        parse_form_date(form.start_date.as_deref())?,
        parse_form_date(form.end_date.as_deref())?,
    );

    let discount_type = form
        .discount_type
        .as_deref()
        .and_then(DiscountType::from_str_param)
        .unwrap_or(DiscountType::Percentage);

    match kind {
        OfferKind::Single => {
            if let (Some(product_id), Some(vendor)) = (form.product_id, &vendor) {
                let product_id = ProductId::new(product_id);
                // Reference price comes from the vendor's product list;
                // unknown stays None and blocks a fixed discount later.
                let price = state
                    .reference()
                    .reference_price(state.platform(), vendor, &product_id)
                    .await?;
                draft.select_product(ProductSelection {
                    id: product_id,
                    price,
                });
            }
            draft.set_discount(discount_type, form.discount_value.unwrap_or_default());
        }
        OfferKind::Package => {
            for id in form.product_ids {
                draft.add_product(ProductId::new(id));
            }
            draft.set_bundle_price(form.bundle_price.unwrap_or_default());
        }
        OfferKind::Delivery => {
            draft.set_discount(discount_type, form.discount_value.unwrap_or_default());
        }
    }

    draft.image = match (form.image, form.image_url) {
        (Some(local), _) => ImageSource::Pending(local),
        (None, Some(url)) => ImageSource::Remote(url),
        (None, None) => ImageSource::None,
    };

    Ok(draft)
}

fn parse_form_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest(format!("invalid date '{s}'")))
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date(Some("2024-01-10")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
        assert_eq!(parse_form_date(None).unwrap(), None);
        assert!(parse_form_date(Some("10/01/2024")).is_err());
    }

    #[test]
    fn test_some_nonempty() {
        assert_eq!(some_nonempty(String::new()), None);
        assert_eq!(some_nonempty("v-1".to_string()), Some("v-1".to_string()));
    }
}
