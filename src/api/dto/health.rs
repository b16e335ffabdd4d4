//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness response. Reports that the process is serving requests; it does
/// not probe the database.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
