//! Town CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use souq_core::TownId;
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{Page, Town, TownPayload},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a town.
#[derive(Debug, Deserialize)]
pub struct TownForm {
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub delivery_fee: Option<Decimal>,
}

impl TownForm {
    fn into_payload(self) -> Result<TownPayload, AppError> {
        if self.name_ar.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        check(validators::validate_name_ar(&self.name_ar))?;
        check(validators::validate_name_en(&self.name_en))?;
        if self.delivery_fee.is_some_and(|fee| fee <= Decimal::ZERO) {
            return Err(AppError::BadRequest(
                "delivery fee must be greater than zero".to_string(),
            ));
        }

        Ok(TownPayload {
            name_ar: self.name_ar,
            name_en: self.name_en,
            delivery_fee: self.delivery_fee,
        })
    }
}

fn check(result: Option<&'static str>) -> Result<(), AppError> {
    result.map_or(Ok(()), |msg| Err(AppError::BadRequest(msg.to_string())))
}

/// Towns listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Town>>, AppError> {
    let page = state.platform().list_towns(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-town handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<TownForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_town(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Town created")),
    ))
}

/// Update-town handler.
#[instrument(skip(state, form), fields(town_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TownId>,
    Json(form): Json<TownForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_town(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Town updated")))
}

/// Delete-town handler.
#[instrument(skip(state), fields(town_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<TownId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_town(&id).await?;
    Ok(Json(Notification::success("Deleted", "Town deleted")))
}
