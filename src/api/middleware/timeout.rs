//! Per-request timeout.
//!
//! The timeout layer answers with a bare status and no body. [`error_body`]
//! runs outside it and swaps that response for the usual JSON error.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Status the inner layer marks expired requests with.
const TIMEOUT_STATUS: StatusCode = StatusCode::REQUEST_TIMEOUT;

/// Drops the handler future (and any in-flight query) once `timeout` elapses.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(TIMEOUT_STATUS, timeout)
}

/// Reports an expired request as a failed one.
///
/// Used with [`axum::middleware::map_response`].
pub async fn error_body(response: Response) -> Response {
    if response.status() != TIMEOUT_STATUS {
        return response;
    }

    AppError::internal("Request timed out", json!({})).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http;
    use serde_json::Value;

    #[tokio::test]
    async fn test_timeout_status_becomes_json_error() {
        let bare = http::Response::builder()
            .status(TIMEOUT_STATUS)
            .body(Body::empty())
            .unwrap();

        let response = error_body(bare).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "error": true, "msg": "Request timed out" }));
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let ok = http::Response::builder()
            .status(StatusCode::OK)
            .body(Body::from("fine"))
            .unwrap();

        let response = error_body(ok).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"fine");
    }
}
