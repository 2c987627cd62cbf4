//! Configuration loading and constants.
//!
//! Reads the deployment environment once at startup into an immutable
//! `ProcessConfig`, and defines constants for the HTTP listener, logging,
//! response headers, and report formatting. Nothing in here is re-read after
//! the server starts.

use std::net::{IpAddr, SocketAddr};

use const_format::formatcp;

// =============================================================================
// Environment Variables
// =============================================================================

/// Database connection string (required)
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// API secret value (required)
pub const ENV_API_SECRET_KEY: &str = "API_SECRET_KEY";

/// Debug flag, truthy only when equal to "true" ignoring case (optional)
pub const ENV_DEBUG_MODE: &str = "DEBUG_MODE";

/// Deployment environment name (optional)
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Required variables in the order they are reported as missing
pub const REQUIRED_VARS: [&str; 2] = [ENV_DATABASE_URL, ENV_API_SECRET_KEY];

/// Environment name used when `ENVIRONMENT` is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "production";

// =============================================================================
// Report Formatting
// =============================================================================

/// Characters of `DATABASE_URL` shown by `/env-test`
pub const ENV_TEST_PREVIEW_CHARS: usize = 20;

/// Characters of `DATABASE_URL` shown by `/database-status`
pub const DATABASE_STATUS_PREVIEW_CHARS: usize = 30;

/// Suffix appended to truncated previews
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Hint returned by `/config-check` when required variables are missing
pub const SETUP_INSTRUCTIONS: &str = "Check GitHub Secrets configuration";

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name reported by `/info`
pub const APP_NAME: &str = "envcheck";

/// Crate version reported by `/info`
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `rustc --version` of the compiler that built this binary, captured by build.rs
pub const RUSTC_VERSION: &str = env!("ENVCHECK_RUSTC_VERSION");

/// Runtime description reported by `/info` (building compiler and target)
pub const RUNTIME_VERSION: &str = formatcp!(
    "{} ({}-{})",
    RUSTC_VERSION,
    std::env::consts::ARCH,
    std::env::consts::OS
);

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Configuration reports must never be served from an intermediate cache
pub const CACHE_CONTROL_DIAGNOSTIC: &str = "no-store";

/// Response header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Defaults
// =============================================================================

/// Default listen address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default log filter when neither the CLI nor RUST_LOG provide one
pub const DEFAULT_LOG_FILTER: &str = "envcheck=info";

/// Seconds to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Parse host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid listen host {:?}: {}", self.host, e))
        })?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}

/// Snapshot of the deployment environment, taken once at startup.
///
/// Empty `DATABASE_URL` and `API_SECRET_KEY` values count as unset so that
/// every report agrees on what "configured" means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub database_url: Option<String>,
    pub api_secret_key: Option<String>,
    pub debug_mode: bool,
    /// Whether `DEBUG_MODE` was present at all, whatever its value
    pub debug_mode_set: bool,
    pub environment: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            api_secret_key: None,
            debug_mode: false,
            debug_mode_set: false,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ProcessConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_debug = lookup(ENV_DEBUG_MODE);

        Self {
            database_url: non_empty(lookup(ENV_DATABASE_URL)),
            api_secret_key: non_empty(lookup(ENV_API_SECRET_KEY)),
            debug_mode: raw_debug.as_deref().map(parse_debug_flag).unwrap_or(false),
            debug_mode_set: raw_debug.is_some(),
            environment: non_empty(lookup(ENV_ENVIRONMENT))
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    pub fn has_database_url(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn has_api_secret_key(&self) -> bool {
        self.api_secret_key.is_some()
    }

    /// Both required variables are set.
    pub fn is_complete(&self) -> bool {
        self.missing_variables().is_empty()
    }

    /// Unset required variables, in `REQUIRED_VARS` order.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| !self.is_required_set(name))
            .collect()
    }

    fn is_required_set(&self, name: &str) -> bool {
        match name {
            ENV_DATABASE_URL => self.has_database_url(),
            ENV_API_SECRET_KEY => self.has_api_secret_key(),
            _ => false,
        }
    }

    /// Length of the secret in characters (0 when unset).
    pub fn api_secret_key_length(&self) -> usize {
        self.api_secret_key
            .as_deref()
            .map(|key| key.chars().count())
            .unwrap_or(0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Only "true" (any case) enables debug mode; anything else is off.
fn parse_debug_flag(raw: &str) -> bool {
    if raw.eq_ignore_ascii_case("true") {
        return true;
    }
    if !raw.eq_ignore_ascii_case("false") {
        tracing::warn!(value = %raw, "Unrecognized {} value, treating as false", ENV_DEBUG_MODE);
    }
    false
}

/// First `max_chars` characters of `value` followed by an ellipsis.
pub fn preview(value: &str, max_chars: usize) -> String {
    let mut out: String = value.chars().take(max_chars).collect();
    out.push_str(PREVIEW_ELLIPSIS);
    out
}

/// Like [`preview`], but returns `value` untouched when it already fits.
pub fn preview_if_longer(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        preview(value, max_chars)
    } else {
        value.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Validation(String),
}
