//! Staff CRUD handlers: console admins and delivery agents.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use souq_core::{AdminId, AgentId, TownId};
use tracing::instrument;

use crate::{
    error::AppError,
    offers::validators,
    platform::{AdminUser, AdminUserPayload, Agent, AgentPayload, Page},
    state::AppState,
};

use super::{ListParams, Notification};

fn require_mobile(mobile: &str) -> Result<(), AppError> {
    if mobile.trim().is_empty() {
        return Err(AppError::BadRequest("mobile is required".to_string()));
    }
    validators::validate_mobile(mobile)
        .map_or(Ok(()), |msg| Err(AppError::BadRequest(msg.to_string())))
}

// =============================================================================
// Admins
// =============================================================================

/// Dialog form for a console admin.
#[derive(Debug, Deserialize)]
pub struct AdminForm {
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub super_admin: bool,
}

impl AdminForm {
    fn into_payload(self) -> Result<AdminUserPayload, AppError> {
        require_mobile(&self.mobile)?;
        Ok(AdminUserPayload {
            name: self.name,
            mobile: self.mobile,
            super_admin: self.super_admin,
        })
    }
}

/// Admins listing handler.
#[instrument(skip(state))]
pub async fn list_admins(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<AdminUser>>, AppError> {
    let page = state.platform().list_admins(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-admin handler.
#[instrument(skip(state, form))]
pub async fn create_admin(
    State(state): State<AppState>,
    Json(form): Json<AdminForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_admin(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Admin created")),
    ))
}

/// Update-admin handler.
#[instrument(skip(state, form), fields(admin_id = %id))]
pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<AdminId>,
    Json(form): Json<AdminForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_admin(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Admin updated")))
}

/// Delete-admin handler.
#[instrument(skip(state), fields(admin_id = %id))]
pub async fn remove_admin(
    State(state): State<AppState>,
    Path(id): Path<AdminId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_admin(&id).await?;
    Ok(Json(Notification::success("Deleted", "Admin deleted")))
}

// =============================================================================
// Agents
// =============================================================================

/// Dialog form for a delivery agent.
#[derive(Debug, Deserialize)]
pub struct AgentForm {
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub town_id: Option<TownId>,
    #[serde(default = "default_true")]
    pub active: bool,
}

const fn default_true() -> bool {
    true
}

impl AgentForm {
    fn into_payload(self) -> Result<AgentPayload, AppError> {
        require_mobile(&self.mobile)?;
        Ok(AgentPayload {
            name: self.name,
            mobile: self.mobile,
            town_id: self.town_id,
            active: self.active,
        })
    }
}

/// Agents listing handler.
#[instrument(skip(state))]
pub async fn list_agents(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Agent>>, AppError> {
    let page = state.platform().list_agents(params.page, params.q).await?;
    Ok(Json(page))
}

/// Create-agent handler.
#[instrument(skip(state, form))]
pub async fn create_agent(
    State(state): State<AppState>,
    Json(form): Json<AgentForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let payload = form.into_payload()?;
    state.platform().create_agent(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Notification::success("Saved", "Agent created")),
    ))
}

/// Update-agent handler.
#[instrument(skip(state, form), fields(agent_id = %id))]
pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
    Json(form): Json<AgentForm>,
) -> Result<Json<Notification>, AppError> {
    let payload = form.into_payload()?;
    state.platform().update_agent(&id, &payload).await?;

    Ok(Json(Notification::success("Saved", "Agent updated")))
}

/// Delete-agent handler.
#[instrument(skip(state), fields(agent_id = %id))]
pub async fn remove_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
) -> Result<Json<Notification>, AppError> {
    state.platform().delete_agent(&id).await?;
    Ok(Json(Notification::success("Deleted", "Agent deleted")))
}
