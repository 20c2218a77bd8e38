//! Staff domain types: console admins and delivery agents.

use serde::{Deserialize, Serialize};
use souq_core::{AdminId, AgentId, TownId};

/// A console administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Admin ID.
    pub id: AdminId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Mobile number.
    #[serde(default)]
    pub mobile: String,
    /// Whether the admin can manage other admins.
    #[serde(default)]
    pub super_admin: bool,
}

/// Create/update payload for an admin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserPayload {
    pub name: String,
    pub mobile: String,
    pub super_admin: bool,
}

/// A delivery agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID.
    pub id: AgentId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Mobile number.
    #[serde(default)]
    pub mobile: String,
    /// Town the agent covers.
    #[serde(default)]
    pub town_id: Option<TownId>,
    /// Whether the agent is on shift.
    #[serde(default)]
    pub active: bool,
}

/// Create/update payload for an agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPayload {
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_id: Option<TownId>,
    pub active: bool,
}
