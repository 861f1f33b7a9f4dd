//! Error types for the quote API.
//!
//! The calculator itself cannot fail; every variant here belongs to the
//! boundary around it (request validation and catalog lookups).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API errors, each mapped to an HTTP status and a stable error code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or a value the boundary refuses (e.g. zero quantity)
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Delivery zone not found: {0}")]
    ZoneNotFound(i64),

    /// Zone exists but is not currently offered
    #[error("Delivery zone {0} is not available for selection")]
    ZoneInactive(i64),

    /// Direct product lookup miss
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// A cart references a product the catalog cannot resolve.
    /// Reported instead of a partial quote.
    #[error("Quote unavailable: product {0} could not be resolved")]
    ProductUnavailable(i64),

    /// Request handling exceeded the configured timeout
    #[error("Request timed out before the quote could be calculated")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::ZoneNotFound(_) | ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ZoneInactive(_) => StatusCode::CONFLICT,
            ApiError::ProductUnavailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "invalid_request",
            ApiError::ZoneNotFound(_) => "zone_not_found",
            ApiError::ZoneInactive(_) => "zone_inactive",
            ApiError::ProductNotFound(_) => "product_not_found",
            ApiError::ProductUnavailable(_) => "quote_unavailable",
            ApiError::Timeout => "request_timeout",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "request rejected");
        }

        (
            status,
            Json(json!({
                "error": {
                    "code": self.code(),
                    "message": self.to_string(),
                }
            })),
        )
            .into_response()
    }
}

/// Convenience alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
