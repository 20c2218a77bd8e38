//! Customer handlers (update/delete only; accounts are created by the
//! customer apps).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use souq_core::{CustomerId, TownId};
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{Customer, CustomerPayload, Page},
    state::AppState,
};

use super::{ListParams, Notification};

/// Dialog form for a customer.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub town_id: Option<TownId>,
    #[serde(default)]
    pub blocked: bool,
}

impl CustomerForm {
    fn into_payload(self) -> Result<CustomerPayload, AppError> {
        if self.mobile.trim().is_empty() {
            return Err(AppError::BadRequest("mobile is required".to_string()));
        }
        if let Some(msg) = validators::validate_mobile(&self.mobile) {
            return Err(AppError::BadRequest(msg.to_string()));
        }

        Ok(CustomerPayload {
            name: self.name,
            mobile: self.mobile,
            town_id: self.town_id,
            blocked: self.blocked,
        })
    }
}

/// Customers listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Customer>>, AppError> {
    let page = state
        .platform()
        .list_customers(params.page, params.q)
        .await?;
    Ok(Json(page))
}

/// Update-customer handler.
#[instrument(skip(state, form), fields(customer_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(form): Json<CustomerForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_customer(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Customer updated")))
}

/// Delete-customer handler.
#[instrument(skip(state), fields(customer_id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_customer(&id).await?;
    Ok(Json(Notification::success("Deleted", "Customer deleted")))
}
