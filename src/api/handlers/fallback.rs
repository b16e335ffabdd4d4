//! Handlers for requests that match no route.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers 404 for paths with no route, in the usual error body.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("Cannot {} {}", method, uri.path()), json!({}))
}

/// Answers 405 when the path exists but the method does not.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Method Not Allowed", json!({}))
}
