//! Vendor operations on the platform API.

use souq_core::VendorId;
use tracing::instrument;

use super::{Page, PlatformClient, PlatformError, Vendor, VendorPayload};

impl PlatformClient {
    /// Get a paginated list of vendors.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_vendors(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Vendor>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/vendors", &params).await
    }

    /// Get every vendor, for dialog option lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_all_vendors(&self) -> Result<Vec<Vendor>, PlatformError> {
        self.get("/vendors/all").await
    }

    /// Create a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_vendor(&self, payload: &VendorPayload) -> Result<Vendor, PlatformError> {
        self.post("/vendors", payload).await
    }

    /// Update a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(vendor_id = %id))]
    pub async fn update_vendor(
        &self,
        id: &VendorId,
        payload: &VendorPayload,
    ) -> Result<Vendor, PlatformError> {
        self.put(&format!("/vendors/{id}"), payload).await
    }

    /// Delete a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn delete_vendor(&self, id: &VendorId) -> Result<(), PlatformError> {
        self.delete(&format!("/vendors/{id}")).await
    }
}
