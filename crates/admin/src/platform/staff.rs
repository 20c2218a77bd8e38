//! Staff operations on the platform API: console admins and delivery agents.

use souq_core::{AdminId, AgentId};
use tracing::instrument;

use super::{AdminUser, AdminUserPayload, Agent, AgentPayload, Page, PlatformClient, PlatformError};

impl PlatformClient {
    /// Get a paginated list of console admins.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_admins(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<AdminUser>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/admins", &params).await
    }

    /// Create a console admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_admin(
        &self,
        payload: &AdminUserPayload,
    ) -> Result<AdminUser, PlatformError> {
        self.post("/admins", payload).await
    }

    /// Update a console admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(admin_id = %id))]
    pub async fn update_admin(
        &self,
        id: &AdminId,
        payload: &AdminUserPayload,
    ) -> Result<AdminUser, PlatformError> {
        self.put(&format!("/admins/{id}"), payload).await
    }

    /// Delete a console admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(admin_id = %id))]
    pub async fn delete_admin(&self, id: &AdminId) -> Result<(), PlatformError> {
        self.delete(&format!("/admins/{id}")).await
    }

    /// Get a paginated list of delivery agents.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_agents(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Agent>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/agents", &params).await
    }

    /// Create a delivery agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload))]
    pub async fn create_agent(&self, payload: &AgentPayload) -> Result<Agent, PlatformError> {
        self.post("/agents", payload).await
    }

    /// Update a delivery agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(agent_id = %id))]
    pub async fn update_agent(
        &self,
        id: &AgentId,
        payload: &AgentPayload,
    ) -> Result<Agent, PlatformError> {
        self.put(&format!("/agents/{id}"), payload).await
    }

    /// Delete a delivery agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(agent_id = %id))]
    pub async fn delete_agent(&self, id: &AgentId) -> Result<(), PlatformError> {
        self.delete(&format!("/agents/{id}")).await
    }
}
