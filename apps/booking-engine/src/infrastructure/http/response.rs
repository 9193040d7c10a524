//! HTTP response types and error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::booking::errors::BookingError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Stable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION"),
            Self::VenueNotFound { .. } => (StatusCode::NOT_FOUND, "VENUE_NOT_FOUND"),
            Self::OrderNotFound { .. } => (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND"),
            Self::NotOwner { .. } => (StatusCode::FORBIDDEN, "NOT_OWNER"),
            Self::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE"),
        };
        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
