//! Category CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use souq_core::CategoryId;
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{Category, CategoryPayload, Page},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a category.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub image: String,
}

impl CategoryForm {
    fn into_payload(self) -> Result<CategoryPayload, AppError> {
        if self.name_ar.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        check(validators::validate_name_ar(&self.name_ar))?;
        check(validators::validate_name_en(&self.name_en))?;

        Ok(CategoryPayload {
            name_ar: self.name_ar,
            name_en: self.name_en,
            image: self.image,
        })
    }
}

fn check(result: Option<&'static str>) -> Result<(), AppError> {
    result.map_or(Ok(()), |msg| Err(AppError::BadRequest(msg.to_string())))
}

/// Categories listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Category>>, AppError> {
    let page = state
        .platform()
        .list_categories(params.page, params.q)
        .await?;
    Ok(Json(page))
}

/// Create-category handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<CategoryForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_category(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Category created")),
    ))
}

/// Update-category handler.
#[instrument(skip(state, form), fields(category_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(form): Json<CategoryForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_category(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Category updated")))
}

/// Delete-category handler.
#[instrument(skip(state), fields(category_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_category(&id).await?;
    Ok(Json(Notification::success("Deleted", "Category deleted")))
}
