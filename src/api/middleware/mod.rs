//! HTTP middleware for request processing.
//!
//! Provides request-id assignment, structured request/response tracing and
//! the per-request timeout.

pub mod timeout;
pub mod tracing;
