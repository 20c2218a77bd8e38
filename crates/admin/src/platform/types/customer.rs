//! Customer domain types.

use serde::{Deserialize, Serialize};
use souq_core::{CustomerId, TownId};

/// A platform customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Mobile number used for login and delivery contact.
    #[serde(default)]
    pub mobile: String,
    /// Home town.
    #[serde(default)]
    pub town_id: Option<TownId>,
    /// Whether the account is blocked from ordering.
    #[serde(default)]
    pub blocked: bool,
}

/// Update payload for a customer (admins never create customers).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_id: Option<TownId>,
    pub blocked: bool,
}
