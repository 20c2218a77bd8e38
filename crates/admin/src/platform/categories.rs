//! Category operations on the platform API.

use souq_core::CategoryId;
use tracing::instrument;

use super::{Category, CategoryPayload, Page, PlatformClient, PlatformError};

impl PlatformClient {
    /// Get a paginated list of categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Category>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/categories", &params).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<Category, PlatformError> {
        self.post("/categories", payload).await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: &CategoryId,
        payload: &CategoryPayload,
    ) -> Result<Category, PlatformError> {
        self.put(&format!("/categories/{id}"), payload).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), PlatformError> {
        self.delete(&format!("/categories/{id}")).await
    }
}
