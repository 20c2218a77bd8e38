//! Banner CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use souq_core::{BannerId, PublishStatus, VendorId};
use tracing::instrument;

use crate::{
    error::AppError,
    platform::{Banner, BannerPayload, Page},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a banner.
#[derive(Debug, Deserialize)]
pub struct BannerForm {
    pub image: String,
    #[serde(default)]
    pub shop_id: Option<VendorId>,
    #[serde(default)]
    pub status: PublishStatus,
}

impl BannerForm {
    fn into_payload(self) -> Result<BannerPayload, AppError> {
        if self.image.trim().is_empty() {
            return Err(AppError::BadRequest("image is required".to_string()));
        }

        Ok(BannerPayload {
            image: self.image,
            shop_id: self.shop_id,
            status: self.status,
        })
    }
}

/// Banners listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Banner>>, AppError> {
    let page = state.platform().list_banners(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-banner handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<BannerForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_banner(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Banner created")),
    ))
}

/// Update-banner handler.
#[instrument(skip(state, form), fields(banner_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
    Json(form): Json<BannerForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_banner(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Banner updated")))
}

/// Delete-banner handler.
#[instrument(skip(state), fields(banner_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_banner(&id).await?;
    Ok(Json(Notification::success("Deleted", "Banner deleted")))
}
