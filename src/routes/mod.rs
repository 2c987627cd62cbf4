//! HTTP route handlers for the diagnostic endpoints.
//!
//! Every endpoint is a `GET` that reads the startup configuration snapshot and
//! returns a small JSON report. All responses carry `Cache-Control: no-store`
//! since they describe the live deployment.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod database;
pub mod env;
pub mod health;
pub mod home;
pub mod info;
pub mod secure;

use axum::{middleware, routing::get, Router};
use chrono::{Local, SecondsFormat};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_DIAGNOSTIC;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Current wall-clock time as an ISO-8601 string with local offset.
pub fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/info", get(info::info))
        .route("/env-test", get(env::env_test))
        .route("/secure-info", get(secure::secure_info))
        .route("/database-status", get(database::status))
        .route("/config-check", get(env::config_check))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DIAGNOSTIC),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
