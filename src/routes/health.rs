//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use super::timestamp;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
/// It never looks at configuration, so a misconfigured deployment is still "healthy".
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        timestamp: timestamp(),
    })
}
