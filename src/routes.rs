//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Liveness check
//! - `/api/v1/users*`     - User REST API
//!
//! Unknown paths answer 404 and known paths with the wrong method answer 405,
//! both with the JSON error body.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when missing and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests running past the configured limit fail with 500
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router without path normalization.
///
/// When the timeout fires, the handler future is dropped together with any
/// in-flight database call.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::user_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(map_response(timeout::error_body))
        .layer(tracing::propagate_request_id())
        .layer(tracing::layer())
        .layer(tracing::set_request_id())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/users/` and
/// `/api/v1/users` are the same endpoint.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
