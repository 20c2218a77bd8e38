//! Cached reference data for the dialogs.
//!
//! The offer dialogs need two option lists: the vendors, and the
//! products of the selected vendor (whose prices bound fixed discounts).
//! Both are cached with a TTL and refetched wholesale - a vendor change
//! discards the previous product list rather than diffing it, trading a
//! redundant round trip for the guarantee that no stale cross-vendor
//! product ever stays selectable.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;
use souq_core::{ProductId, VendorId};
use tracing::{debug, instrument};

use crate::platform::{PlatformClient, PlatformError, Product, Vendor};

/// Upper bound on distinct cached keys (vendor count is far below this).
const MAX_CACHED_ENTRIES: u64 = 1000;

/// Cached vendor and per-vendor product lists.
#[derive(Clone)]
pub struct ReferenceData {
    vendors: Cache<(), Arc<Vec<Vendor>>>,
    products: Cache<VendorId, Arc<Vec<Product>>>,
}

impl ReferenceData {
    /// Create the caches with the configured TTL.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        let ttl = Duration::from_secs(ttl_secs);
        Self {
            vendors: Cache::builder()
                .max_capacity(1)
                .time_to_live(ttl)
                .build(),
            products: Cache::builder()
                .max_capacity(MAX_CACHED_ENTRIES)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// The vendor option list, cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform API request fails on a miss.
    #[instrument(skip(self, client))]
    pub async fn vendors(
        &self,
        client: &PlatformClient,
    ) -> Result<Arc<Vec<Vendor>>, PlatformError> {
        if let Some(cached) = self.vendors.get(&()).await {
            return Ok(cached);
        }

        debug!("vendor list cache miss");
        let fetched = Arc::new(client.list_all_vendors().await?);
        self.vendors.insert((), Arc::clone(&fetched)).await;
        Ok(fetched)
    }

    /// The product candidate list for one vendor, cached per vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform API request fails on a miss.
    #[instrument(skip(self, client), fields(vendor_id = %vendor))]
    pub async fn products_for(
        &self,
        client: &PlatformClient,
        vendor: &VendorId,
    ) -> Result<Arc<Vec<Product>>, PlatformError> {
        if let Some(cached) = self.products.get(vendor).await {
            return Ok(cached);
        }

        debug!("product list cache miss");
        let fetched = Arc::new(client.list_products_by_vendor(vendor).await?);
        self.products
            .insert(vendor.clone(), Arc::clone(&fetched))
            .await;
        Ok(fetched)
    }

    /// The reference price of one product of one vendor, when the list
    /// has it.
    ///
    /// # Errors
    ///
    /// Returns an error if the product list fetch fails.
    pub async fn reference_price(
        &self,
        client: &PlatformClient,
        vendor: &VendorId,
        product: &ProductId,
    ) -> Result<Option<Decimal>, PlatformError> {
        let products = self.products_for(client, vendor).await?;
        Ok(products
            .iter()
            .find(|p| &p.id == product)
            .map(|p| p.price))
    }

    /// Discard one vendor's cached product list (its catalog changed).
    pub async fn invalidate_products(&self, vendor: &VendorId) {
        self.products.invalidate(vendor).await;
    }

    /// Discard the cached vendor list (a vendor was created or removed).
    pub async fn invalidate_vendors(&self) {
        self.vendors.invalidate(&()).await;
    }
}

impl std::fmt::Debug for ReferenceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceData").finish_non_exhaustive()
    }
}
