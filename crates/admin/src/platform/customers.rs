//! Customer operations on the platform API.

use souq_core::CustomerId;
use tracing::instrument;

use super::{Customer, CustomerPayload, Page, PlatformClient, PlatformError};

impl PlatformClient {
    /// Get a paginated list of customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_customers(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Customer>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/customers", &params).await
    }

    /// Update a customer (contact details, town, block flag).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        payload: &CustomerPayload,
    ) -> Result<Customer, PlatformError> {
        self.put(&format!("/customers/{id}"), payload).await
    }

    /// Delete a customer account.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), PlatformError> {
        self.delete(&format!("/customers/{id}")).await
    }
}
