//! Endpoint gated on the API secret being configured.
//!
//! This does not authenticate the caller. It only refuses to answer when the
//! deployment forgot to inject `API_SECRET_KEY`.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::ENV_API_SECRET_KEY;
use crate::error::AppError;
use crate::state::AppState;

use super::timestamp;

#[derive(Debug, Serialize)]
pub struct SecureInfoReport {
    pub message: &'static str,
    pub secret_key_configured: bool,
    pub debug_mode: bool,
    pub timestamp: String,
}

pub async fn secure_info(State(state): State<AppState>) -> Result<Json<SecureInfoReport>, AppError> {
    if !state.config.has_api_secret_key() {
        return Err(AppError::Configuration(format!(
            "{} environment variable not configured",
            ENV_API_SECRET_KEY
        )));
    }

    Ok(Json(SecureInfoReport {
        message: "Secure endpoint accessed successfully!",
        secret_key_configured: true,
        debug_mode: state.config.debug_mode,
        timestamp: timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessConfig;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn test_secure_info_without_secret_fails() {
        let err = secure_info(State(AppState::new(ProcessConfig::default())))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API_SECRET_KEY environment variable not configured");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_secure_info_with_empty_secret_fails() {
        let config = ProcessConfig::from_lookup(|name| {
            (name == "API_SECRET_KEY").then(String::new)
        });
        assert!(secure_info(State(AppState::new(config))).await.is_err());
    }

    #[tokio::test]
    async fn test_secure_info_with_secret() {
        let state = AppState::new(ProcessConfig {
            api_secret_key: Some("abc123".to_string()),
            debug_mode: true,
            ..Default::default()
        });
        let Json(report) = secure_info(State(state)).await.unwrap();

        assert!(report.secret_key_configured);
        assert!(report.debug_mode);
    }
}
