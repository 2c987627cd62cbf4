//! Environment variable reports.
//!
//! `/env-test` gives a quick per-variable summary with short previews, while
//! `/config-check` gives the full picture including which required variables
//! still need to be injected. Neither ever returns a secret value.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::{preview, ENV_TEST_PREVIEW_CHARS, SETUP_INSTRUCTIONS};
use crate::state::AppState;

use super::timestamp;

#[derive(Debug, Serialize)]
pub struct EnvTestReport {
    pub database_url_set: bool,
    pub database_url_preview: Option<String>,
    pub api_secret_key_set: bool,
    pub api_secret_key_length: usize,
    pub debug_mode: bool,
    pub all_env_vars_set: bool,
    pub timestamp: String,
}

/// Presence, preview and length of each injected variable.
pub async fn env_test(State(state): State<AppState>) -> Json<EnvTestReport> {
    let config = &state.config;

    Json(EnvTestReport {
        database_url_set: config.has_database_url(),
        database_url_preview: config
            .database_url
            .as_deref()
            .map(|url| preview(url, ENV_TEST_PREVIEW_CHARS)),
        api_secret_key_set: config.has_api_secret_key(),
        api_secret_key_length: config.api_secret_key_length(),
        debug_mode: config.debug_mode,
        all_env_vars_set: config.is_complete(),
        timestamp: timestamp(),
    })
}

#[derive(Debug, Serialize)]
pub struct RequiredVars {
    #[serde(rename = "DATABASE_URL")]
    pub database_url: bool,
    #[serde(rename = "API_SECRET_KEY")]
    pub api_secret_key: bool,
}

#[derive(Debug, Serialize)]
pub struct OptionalVars {
    #[serde(rename = "DEBUG_MODE")]
    pub debug_mode: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigCheckReport {
    pub environment: String,
    pub debug_mode: bool,
    pub required_vars: RequiredVars,
    pub optional_vars: OptionalVars,
    pub configuration_complete: bool,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_variables: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_instructions: Option<&'static str>,
}

/// Full configuration checklist.
///
/// `missing_variables` and `setup_instructions` only appear while the
/// configuration is incomplete.
pub async fn config_check(State(state): State<AppState>) -> Json<ConfigCheckReport> {
    let config = &state.config;
    let missing = config.missing_variables();
    let complete = missing.is_empty();

    if !complete {
        tracing::debug!(missing = ?missing, "Configuration incomplete");
    }

    Json(ConfigCheckReport {
        environment: config.environment.clone(),
        debug_mode: config.debug_mode,
        required_vars: RequiredVars {
            database_url: config.has_database_url(),
            api_secret_key: config.has_api_secret_key(),
        },
        optional_vars: OptionalVars {
            debug_mode: config.debug_mode_set,
        },
        configuration_complete: complete,
        timestamp: timestamp(),
        missing_variables: (!complete).then_some(missing),
        setup_instructions: (!complete).then_some(SETUP_INSTRUCTIONS),
    })
}
