//! Town operations on the platform API.

use souq_core::TownId;
use tracing::instrument;

use super::{Page, PlatformClient, PlatformError, Town, TownPayload};

impl PlatformClient {
    /// Get a paginated list of towns.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_towns(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Town>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/towns", &params).await
    }

    /// Create a town.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_town(&self, payload: &TownPayload) -> Result<Town, PlatformError> {
        self.post("/towns", payload).await
    }

    /// Update a town.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(town_id = %id))]
    pub async fn update_town(
        &self,
        id: &TownId,
        payload: &TownPayload,
    ) -> Result<Town, PlatformError> {
        self.put(&format!("/towns/{id}"), payload).await
    }

    /// Delete a town.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(town_id = %id))]
    pub async fn delete_town(&self, id: &TownId) -> Result<(), PlatformError> {
        self.delete(&format!("/towns/{id}")).await
    }
}
