//! Order operations on the platform API.

use souq_core::{OrderId, OrderStatus};
use tracing::instrument;

use super::{Order, Page, PlatformClient, PlatformError};

impl PlatformClient {
    /// Get a paginated list of orders.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `query` - Optional keyword search (order code, customer mobile)
    /// * `status` - Optional status filter for the live board
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        page: u32,
        query: Option<String>,
        status: Option<OrderStatus>,
    ) -> Result<Page<Order>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        if let Some(status) = status {
            params.push(("status", status.as_str().to_string()));
        }
        self.get_query("/orders", &params).await
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the order is missing.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, PlatformError> {
        self.get(&format!("/orders/{id}")).await
    }
}
