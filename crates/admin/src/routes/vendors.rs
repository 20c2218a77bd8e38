//! Vendor CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use souq_core::{TownId, VendorId};
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{Page, Vendor, VendorPayload},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a vendor.
#[derive(Debug, Deserialize)]
pub struct VendorForm {
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub town_id: Option<TownId>,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub delivery_fee: Option<Decimal>,
}

impl VendorForm {
    fn into_payload(self) -> Result<VendorPayload, AppError> {
        if self.name_ar.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        check(validators::validate_name_ar(&self.name_ar))?;
        check(validators::validate_name_en(&self.name_en))?;
        check(validators::validate_mobile(&self.mobile))?;

        Ok(VendorPayload {
            name_ar: self.name_ar,
            name_en: self.name_en,
            image: self.image,
            town_id: self.town_id,
            mobile: self.mobile,
            delivery_fee: self.delivery_fee,
        })
    }
}

fn check(result: Option<&'static str>) -> Result<(), AppError> {
    result.map_or(Ok(()), |msg| Err(AppError::BadRequest(msg.to_string())))
}

/// Vendors listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Vendor>>, AppError> {
    let page = state.platform().list_vendors(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-vendor handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<VendorForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_vendor(&payload).await?;
    state.reference().invalidate_vendors().await;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Vendor created")),
    ))
}

/// Update-vendor handler.
#[instrument(skip(state, form), fields(vendor_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<VendorId>,
    Json(form): Json<VendorForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_vendor(&id, &payload).await?;
    state.reference().invalidate_vendors().await;

    Ok(Json(Notification::success("Saved", "Vendor updated")))
}

/// Delete-vendor handler.
#[instrument(skip(state), fields(vendor_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<VendorId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_vendor(&id).await?;
    state.reference().invalidate_vendors().await;
    state.reference().invalidate_products(&id).await;

    Ok(Json(Notification::success("Deleted", "Vendor deleted")))
}
