//! Offer operations on the platform API.
//!
//! Creation is split by kind at the transport layer: single, package and
//! delivery offers each have their own endpoint. Updates go through one
//! shared endpoint regardless of kind, and deletion is split again
//! because delivery offers live in their own collection server-side.

use souq_core::OfferId;
use tracing::instrument;

use super::{
    DeliveryOfferPayload, Offer, OfferKind, OfferPayload, PackageOfferPayload, Page,
    PlatformClient, PlatformError, SingleOfferPayload,
};

impl PlatformClient {
    /// Get a paginated list of offers.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `query` - Optional keyword search
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_offers(
        &self,
        page: u32,
        query: Option<String>,
    ) -> Result<Page<Offer>, PlatformError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q));
        }
        self.get_query("/offers", &params).await
    }

    /// Get a single offer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the offer is missing.
    #[instrument(skip(self), fields(offer_id = %id))]
    pub async fn get_offer(&self, id: &OfferId) -> Result<Offer, PlatformError> {
        self.get(&format!("/offers/{id}")).await
    }

    /// Create a single-product offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(shop_id = %payload.shop_id))]
    pub async fn create_single_offer(
        &self,
        payload: &SingleOfferPayload,
    ) -> Result<Offer, PlatformError> {
        self.post("/offers", payload).await
    }

    /// Create a package offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(shop_id = %payload.shop_id))]
    pub async fn create_package_offer(
        &self,
        payload: &PackageOfferPayload,
    ) -> Result<Offer, PlatformError> {
        self.post("/offers/package", payload).await
    }

    /// Create a delivery offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(shop_id = %payload.shop_id))]
    pub async fn create_delivery_offer(
        &self,
        payload: &DeliveryOfferPayload,
    ) -> Result<Offer, PlatformError> {
        self.post("/offers/delivery", payload).await
    }

    /// Update an existing offer.
    ///
    /// One endpoint serves all kinds; the payload's field set is still
    /// variant-dependent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or rejects the payload.
    #[instrument(skip(self, payload), fields(offer_id = %id))]
    pub async fn update_offer(
        &self,
        id: &OfferId,
        payload: &OfferPayload,
    ) -> Result<Offer, PlatformError> {
        self.put(&format!("/offers/{id}"), payload).await
    }

    /// Delete an offer, dispatching on its kind.
    ///
    /// Delivery offers live in their own collection server-side, so the
    /// transport splits what is a uniform "delete this offer" intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(offer_id = %id, kind = %kind))]
    pub async fn delete_offer(&self, id: &OfferId, kind: OfferKind) -> Result<(), PlatformError> {
        match kind {
            OfferKind::Delivery => self.delete(&format!("/offers/delivery/{id}")).await,
            OfferKind::Single | OfferKind::Package => self.delete(&format!("/offers/{id}")).await,
        }
    }
}
