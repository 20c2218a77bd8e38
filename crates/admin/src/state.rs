//! Application state shared across handlers.

use std::sync::Arc;

use crate::{
    config::AdminConfig,
    offers::OfferSubmitter,
    platform::{PlatformClient, PlatformError},
    services::{OrderFeed, ReferenceData},
};

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    platform: PlatformClient,
    reference: ReferenceData,
    feed: OrderFeed,
    offers: OfferSubmitter<PlatformClient, PlatformClient>,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform client fails to build.
    pub fn new(config: AdminConfig) -> Result<Self, PlatformError> {
        let platform = PlatformClient::new(&config.platform)?;
        let reference = ReferenceData::new(config.reference_cache_ttl_secs);
        let feed = OrderFeed::new();
        let offers = OfferSubmitter::new(platform.clone(), platform.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                platform,
                reference,
                feed,
                offers,
            }),
        })
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The platform API client.
    #[must_use]
    pub fn platform(&self) -> &PlatformClient {
        &self.inner.platform
    }

    /// The reference-data caches.
    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.inner.reference
    }

    /// The live order feed.
    #[must_use]
    pub fn feed(&self) -> &OrderFeed {
        &self.inner.feed
    }

    /// The offer submission orchestrator.
    #[must_use]
    pub fn offers(&self) -> &OfferSubmitter<PlatformClient, PlatformClient> {
        &self.inner.offers
    }
}
