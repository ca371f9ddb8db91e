//! API error types and Axum error response mapping (spec.md §S.5).
//!
//! Both a malformed request body and an invalid X12 payload map to the
//! same 400 response with a fixed, non-leaky message, following the
//! original API's single `detail: "Invalid X12 payload..."` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body")]
    BadRequest,

    #[error("invalid X12 payload")]
    InvalidX12,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::BadRequest => "Invalid request. Expected {'x12': <x12 message string>}",
            ApiError::InvalidX12 => "Invalid X12 payload. To troubleshoot please run the x12 CLI",
        };
        (StatusCode::BAD_REQUEST, Json(json!({ "detail": message }))).into_response()
    }
}
