//! Build metadata endpoint.
//!
//! Reports the application name and version along with the compiler and
//! target the binary was built for.

use axum::Json;
use serde::Serialize;

use crate::config::{APP_NAME, APP_VERSION, RUNTIME_VERSION};

use super::timestamp;

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub app_name: &'static str,
    pub version: &'static str,
    pub runtime_version: &'static str,
    pub timestamp: String,
}

/// Static build metadata.
pub async fn info() -> Json<InfoReport> {
    Json(InfoReport {
        app_name: APP_NAME,
        version: APP_VERSION,
        runtime_version: RUNTIME_VERSION,
        timestamp: timestamp(),
    })
}
