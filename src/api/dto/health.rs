//! DTO for the health check endpoint.

use serde::Serialize;

/// Health check response: `{"status": "ok"}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
