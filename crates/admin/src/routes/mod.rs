//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness (pings the platform API)
//!
//! # Offers (the engine)
//! GET    /offers                   - Offer listing (page, q)
//! POST   /offers                   - Create offer (multipart: fields + image)
//! GET    /offers/{id}              - Edit-dialog hydration view
//! PUT    /offers/{id}              - Update offer (multipart)
//! DELETE /offers/{id}?kind=...     - Delete offer (kind-split transport)
//! GET    /offers/options/vendors   - Vendor option list for the dialogs
//! GET    /offers/options/products  - Product options for one vendor
//!
//! # Live order board
//! GET  /orders/board               - SSE stream of order events
//! POST /hooks/orders               - Push-channel webhook ingest
//!
//! # Entity tables (server pagination + keyword search)
//! GET/POST       /vendors          GET/PUT/DELETE /vendors/{id}
//! GET/POST       /products         GET/PUT/DELETE /products/{id}
//! GET            /orders           GET            /orders/{id}
//! GET/POST       /towns            PUT/DELETE     /towns/{id}
//! GET/POST       /banners          PUT/DELETE     /banners/{id}
//! GET            /customers        PUT/DELETE     /customers/{id}
//! GET/POST       /categories       PUT/DELETE     /categories/{id}
//! GET/POST       /admins           PUT/DELETE     /admins/{id}
//! GET/POST       /agents           PUT/DELETE     /agents/{id}
//! ```

pub mod banners;
pub mod board;
pub mod categories;
pub mod customers;
pub mod offers;
pub mod orders;
pub mod products;
pub mod staff;
pub mod towns;
pub mod vendors;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// How long the dialogs keep a notification on screen.
const NOTIFICATION_DISMISS_MS: u64 = 4000;

/// A user-facing notification: title + message, auto-dismissed.
///
/// Every terminal outcome of a console action - success or error - is
/// one of these. No outcome is silent.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub dismiss_after_ms: u64,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    /// A success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Success,
            dismiss_after_ms: NOTIFICATION_DISMISS_MS,
        }
    }

    /// An error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
            dismiss_after_ms: NOTIFICATION_DISMISS_MS,
        }
    }
}

/// Query parameters shared by every entity listing.
///
/// The search debounce lives client-side; the server just answers the
/// keyword it is given.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Keyword search.
    pub q: Option<String>,
}

const fn default_page() -> u32 {
    1
}

/// Compose every console route.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Offers
        .route("/offers", get(offers::list).post(offers::create))
        .route(
            "/offers/{id}",
            get(offers::detail)
                .put(offers::update)
                .delete(offers::remove),
        )
        .route("/offers/options/vendors", get(offers::vendor_options))
        .route("/offers/options/products", get(offers::product_options))
        // Live order board
        .route("/orders/board", get(board::stream))
        .route("/hooks/orders", post(board::ingest))
        // Orders
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::detail))
        // Vendors
        .route("/vendors", get(vendors::list).post(vendors::create))
        .route(
            "/vendors/{id}",
            put(vendors::update).delete(vendors::remove),
        )
        // Products
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        // Towns
        .route("/towns", get(towns::list).post(towns::create))
        .route("/towns/{id}", put(towns::update).delete(towns::remove))
        // Banners
        .route("/banners", get(banners::list).post(banners::create))
        .route(
            "/banners/{id}",
            put(banners::update).delete(banners::remove),
        )
        // Customers
        .route("/customers", get(customers::list))
        .route(
            "/customers/{id}",
            put(customers::update).delete(customers::remove),
        )
        // Categories
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::remove),
        )
        // Staff
        .route("/admins", get(staff::list_admins).post(staff::create_admin))
        .route(
            "/admins/{id}",
            put(staff::update_admin).delete(staff::remove_admin),
        )
        .route("/agents", get(staff::list_agents).post(staff::create_agent))
        .route(
            "/agents/{id}",
            put(staff::update_agent).delete(staff::remove_agent),
        )
}
