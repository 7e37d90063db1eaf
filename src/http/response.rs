//! Structured JSON error bodies.
//!
//! Both handlers report every failure as `{"error": "<message>"}` with an
//! appropriate status; nothing is allowed to escape as an unhandled error.
//! The message for 500s is the underlying error's display text, which the
//! dashboard client surfaces for diagnostics.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Build a `{"error": message}` response with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
