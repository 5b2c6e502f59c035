//! Response builders shared by the API handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

/// Returns a 200 OK response carrying `body` unchanged.
#[must_use]
pub fn ok_json(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Returns an error response with the given status code, message and optional details.
///
/// `details` is omitted from the body entirely when `None`.
#[must_use]
pub fn err_response(status: StatusCode, message: &str, details: Option<&str>) -> Response {
    let body = match details {
        Some(details) => json!({ "error": message, "details": details }),
        None => json!({ "error": message }),
    };
    (status, Json(body)).into_response()
}
