//! Root greeting.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

use super::timestamp;

pub const GREETING: &str = "Hello from envcheck!";

#[derive(Debug, Serialize)]
pub struct RootReport {
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
}

/// Greeting with the deployment environment name.
pub async fn index(State(state): State<AppState>) -> Json<RootReport> {
    Json(RootReport {
        message: GREETING,
        timestamp: timestamp(),
        environment: state.config.environment.clone(),
    })
}
