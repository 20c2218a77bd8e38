//! Order domain types and the live-board event shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use souq_core::{CustomerId, OrderId, OrderStatus, Price, TownId, VendorId};

/// An order as listed by the platform API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Short human-facing order code.
    #[serde(default)]
    pub code: String,
    /// Current status.
    pub status: OrderStatus,
    /// Vendor the order was placed with.
    pub shop_id: VendorId,
    /// Ordering customer.
    pub customer_id: CustomerId,
    /// Delivery town.
    #[serde(default)]
    pub town_id: Option<TownId>,
    /// Order total including delivery.
    pub total: Price,
    /// Creation timestamp, ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An order event delivered by the push-notification channel.
///
/// The board does not keep order state; it forwards events and lets the
/// clients refresh their listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    /// Order the event concerns.
    pub order_id: OrderId,
    /// Status after the event.
    pub status: OrderStatus,
    /// Vendor the order belongs to.
    pub shop_id: VendorId,
    /// When the platform emitted the event.
    #[serde(default)]
    pub emitted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_shape() {
        let order: Order = serde_json::from_str(
            r#"{"id":"ord-1","status":"PREPARING","shopId":"v-1","customerId":"c-1",
                "total":{"amount":"42.50","currencyCode":"SAR"}}"#,
        )
        .unwrap();
        assert_eq!(order.total.to_string(), "42.50 SAR");
        assert!(order.status.is_open());
    }

    #[test]
    fn test_order_event_wire_shape() {
        let event: OrderEvent = serde_json::from_str(
            r#"{"orderId":"ord-9","status":"ON_THE_WAY","shopId":"v-1"}"#,
        )
        .unwrap();
        assert_eq!(event.status, OrderStatus::OnTheWay);
        assert!(event.emitted_at.is_none());
    }
}
