//! Error types and response handling for the API server.
//!
//! Provides HTTP status code mapping and JSON error envelopes of the form
//! `{"error": "...", "type": "...", "details": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StoreError;

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No presentation with the requested id
    #[error("Presentation not found")]
    NotFound,

    /// Payload parsed but breaks a document constraint
    #[error("Invalid presentation data: {0}")]
    Invalid(#[from] ValidationError),

    /// Payload could not be parsed as a presentation
    #[error("Invalid presentation data: {0}")]
    InvalidBody(String),

    /// Storage failure
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(invalid) => ApiError::Invalid(invalid),
            other => ApiError::Store(other),
        }
    }
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound => "not_found",
            ApiError::Invalid(_) => "invalid_presentation",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Store(_) => "store_error",
        }
    }

    /// Short, stable summary shown to clients.
    pub fn summary(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Presentation not found",
            ApiError::Invalid(_) | ApiError::InvalidBody(_) => "Invalid presentation data",
            ApiError::Store(_) => "Internal server error",
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            ApiError::Invalid(invalid) => serde_json::json!({
                "reason": invalid,
                "message": invalid.to_string(),
            }),
            ApiError::InvalidBody(message) => serde_json::json!({ "message": message }),
            ApiError::NotFound | ApiError::Store(_) => serde_json::Value::Null,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let mut body = serde_json::json!({
            "error": self.summary(),
            "type": self.error_type(),
        });
        let details = self.details();
        if !details.is_null() {
            body["details"] = details;
        }
        (status, Json(body)).into_response()
    }
}
