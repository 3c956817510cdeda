//! API error taxonomy.
//!
//! Two failures cross the service boundary: bad caller input (400) and a
//! failed downstream translation call (500). Detection failure is neither;
//! it degrades to auto mode inside the handler and never reaches callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied text or target failed validation.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The downstream translation call failed; the underlying message is
    /// surfaced with a fixed prefix.
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::TranslationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
