//! Banner operations on the platform API.

use souq_core::BannerId;
use tracing::instrument;

use super::{Banner, BannerPayload, Page, PlatformClient, PlatformError};

impl PlatformClient {
    /// Get a paginated list of banners.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_banners(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Banner>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/banners", &params).await
    }

    /// Create a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_banner(&self, payload: &BannerPayload) -> Result<Banner, PlatformError> {
        self.post("/banners", payload).await
    }

    /// Update a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(banner_id = %id))]
    pub async fn update_banner(
        &self,
        id: &BannerId,
        payload: &BannerPayload,
    ) -> Result<Banner, PlatformError> {
        self.put(&format!("/banners/{id}"), payload).await
    }

    /// Delete a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(banner_id = %id))]
    pub async fn delete_banner(&self, id: &BannerId) -> Result<(), PlatformError> {
        self.delete(&format!("/banners/{id}")).await
    }
}
