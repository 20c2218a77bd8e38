//! Platform REST API client (HIGH PRIVILEGE - VPN only).
//!
//! Type-safe client for the Souq platform API that backs every console
//! screen. The console keeps no state of its own: admins, agents,
//! vendors, products, offers, orders, towns, banners, customers and
//! categories all live behind this API.
//!
//! # API Reference
//!
//! - Base URL: configured via `PLATFORM_API_URL`
//! - Authentication: service token via `Authorization: Bearer <token>`
//! - Errors: JSON body `{ "message": "..." }` with a non-2xx status
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_admin::platform::PlatformClient;
//!
//! let client = PlatformClient::new(&config.platform)?;
//!
//! // Paginated vendor listing with keyword search
//! let vendors = client.list_vendors(1, Some("falafel")).await?;
//!
//! // Kind-split offer creation
//! let offer = client.create_delivery_offer(&payload).await?;
//! ```

pub mod types;

mod banners;
mod categories;
mod customers;
mod offers;
mod orders;
mod products;
mod staff;
mod towns;
mod uploads;
mod vendors;

pub use types::*;
pub use uploads::LocalImage;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::PlatformConfig;

/// Errors that can occur when interacting with the platform API.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the platform.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unauthorized (invalid service token).
    #[error("Unauthorized: invalid service token")]
    Unauthorized,
}

impl PlatformError {
    /// The server-provided message from a structured error body, if any.
    ///
    /// Used to surface the platform's own wording in notifications;
    /// callers fall back to a generic message when this is `None`.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Structured error body returned by the platform API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Platform API client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct PlatformClient {
    inner: Arc<PlatformClientInner>,
}

struct PlatformClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a new platform API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_token.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| PlatformError::Parse(format!("Invalid token format: {e}")))?,
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(PlatformClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Check that the platform API answers at all (readiness probe).
    ///
    /// # Errors
    ///
    /// Returns an error when the API is unreachable or rejects the token.
    pub async fn ping(&self) -> Result<(), PlatformError> {
        let url = format!("{}/health", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(self.parse_error(response).await)
    }

    /// Execute a GET request against the platform API.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.put(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Execute a multipart POST request (file uploads).
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), PlatformError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.delete(&url).send().await?;

        let status = response.status();
        if status.is_success() || status.as_u16() == 204 {
            return Ok(());
        }

        Err(self.parse_error(response).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PlatformError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| PlatformError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(self.parse_error(response).await)
    }

    /// Parse an error response from the platform API.
    async fn parse_error(&self, response: reqwest::Response) -> PlatformError {
        let status = response.status().as_u16();

        // Check for rate limiting
        if status == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return PlatformError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == 401 || status == 403 {
            return PlatformError::Unauthorized;
        }

        // Check for not found
        if status == 404 {
            return PlatformError::NotFound("Resource not found".to_string());
        }

        // Structured error body takes precedence over raw text
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text),
            Err(_) => String::new(),
        };

        PlatformError::Api { status, message }
    }
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::NotFound("offer-123".to_string());
        assert_eq!(err.to_string(), "Not found: offer-123");

        let err = PlatformError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_server_message_from_structured_error() {
        let err = PlatformError::Api {
            status: 422,
            message: "discount exceeds product price".to_string(),
        };
        assert_eq!(err.server_message(), Some("discount exceeds product price"));
    }

    #[test]
    fn test_server_message_absent() {
        assert!(PlatformError::Unauthorized.server_message().is_none());
        assert!(
            PlatformError::Api {
                status: 500,
                message: String::new(),
            }
            .server_message()
            .is_none()
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"vendor is closed"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("vendor is closed"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
