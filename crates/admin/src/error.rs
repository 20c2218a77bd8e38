//! Unified error handling for the console.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::offers::OfferFormError;
use crate::platform::PlatformError;
use crate::routes::Notification;

/// Application-level error type for the admin console.
///
/// Every variant renders as an error notification; none propagate past
/// the route boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform API operation failed.
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// An offer submission was blocked.
    #[error("Offer error: {0}")]
    OfferForm(#[from] OfferFormError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated for this endpoint.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Platform(PlatformError::NotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Platform(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::OfferForm(OfferFormError::SubmissionInFlight) => StatusCode::CONFLICT,
            Self::OfferForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing notification message. Internal details never
    /// reach the client; the platform's own message does when it sent
    /// one.
    fn message(&self) -> String {
        match self {
            Self::Platform(e) => e
                .server_message()
                .unwrap_or("the platform did not accept the request")
                .to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::OfferForm(e) => e.to_string(),
            Self::Unauthorized(msg) => msg.clone(),
            Self::NotFound(what) => format!("{what} was not found"),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Platform(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Console request error"
            );
        }

        let status = self.status();
        let notification = Notification::error("Save failed", self.message());

        (status, Json(notification)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order-123".to_string());
        assert_eq!(err.to_string(), "Not found: order-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::OfferForm(OfferFormError::EmptyPackage).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::OfferForm(OfferFormError::SubmissionInFlight).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Platform(PlatformError::Unauthorized).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_platform_message_passthrough() {
        let err = AppError::Platform(PlatformError::Api {
            status: 422,
            message: "vendor is closed".to_string(),
        });
        assert_eq!(err.message(), "vendor is closed");

        // Internal details are not exposed
        let err = AppError::Internal("db socket torn down".to_string());
        assert_eq!(err.message(), "Internal server error");
    }
}
