//! Order listing and detail handlers (read-only; the board drives
//! refreshes).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use souq_core::{OrderId, OrderStatus};
use tracing::instrument;

use crate::{
    error::AppError,
    platform::{Order, Page},
    state::AppState,
};

/// Listing parameters: shared pagination/search plus a status filter
/// for the board's tabs.
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    pub q: Option<String>,
    pub status: Option<OrderStatus>,
}

const fn first_page() -> u32 {
    1
}

/// Orders listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Page<Order>>, AppError> {
    let page = state
        .platform()
        .list_orders(params.page, params.q, params.status)
        .await?;
    Ok(Json(page))
}

/// Order detail handler.
#[instrument(skip(state), fields(order_id = %id))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, AppError> {
    let order = state.platform().get_order(&id).await?;
    Ok(Json(order))
}
