//! Product CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use souq_core::{CategoryId, ProductId, VendorId};
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{Page, Product, ProductPayload},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a product.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub shop_id: VendorId,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default = "default_true")]
    pub available: bool,
}

const fn default_true() -> bool {
    true
}

impl ProductForm {
    fn into_payload(self) -> Result<ProductPayload, AppError> {
        if self.name_ar.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        check(validators::validate_name_ar(&self.name_ar))?;
        check(validators::validate_name_en(&self.name_en))?;
        if self.price <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "price must be greater than zero".to_string(),
            ));
        }

        Ok(ProductPayload {
            name_ar: self.name_ar,
            name_en: self.name_en,
            price: self.price,
            image: self.image,
            shop_id: self.shop_id,
            category_id: self.category_id,
            available: self.available,
        })
    }
}

fn check(result: Option<&'static str>) -> Result<(), AppError> {
    result.map_or(Ok(()), |msg| Err(AppError::BadRequest(msg.to_string())))
}

/// Products listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Product>>, AppError> {
    let page = state.platform().list_products(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-product handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    let created = state.platform().create_product(&payload).await?;
    // The vendor's candidate list just changed under any open offer dialog
    state.reference().invalidate_products(&created.shop_id).await;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Product created")),
    ))
}

/// Update-product handler.
#[instrument(skip(state, form), fields(product_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    let updated = state.platform().update_product(&id, &payload).await?;
    state.reference().invalidate_products(&updated.shop_id).await;

    Ok(Json(Notification::success("Saved", "Product updated")))
}

/// Delete-product handler.
#[instrument(skip(state), fields(product_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_product(&id).await?;
    Ok(Json(Notification::success("Deleted", "Product deleted")))
}
