//! Product operations on the platform API.

use souq_core::{ProductId, VendorId};
use tracing::instrument;

use super::{Page, PlatformClient, PlatformError, Product, ProductPayload};

impl PlatformClient {
    /// Get a paginated list of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Product>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/products", &params).await
    }

    /// Get every product of one vendor, for the offer dialogs.
    ///
    /// The returned prices are the reference prices that bound fixed
    /// discounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(vendor_id = %vendor))]
    pub async fn list_products_by_vendor(
        &self,
        vendor: &VendorId,
    ) -> Result<Vec<Product>, PlatformError> {
        self.get(&format!("/vendors/{vendor}/products")).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, PlatformError> {
        self.post("/products", payload).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, PlatformError> {
        self.put(&format!("/products/{id}"), payload).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), PlatformError> {
        self.delete(&format!("/products/{id}")).await
    }
}
