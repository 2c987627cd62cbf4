//! envcheck: configuration-status service.
//!
//! This is the application entry point. It initializes tracing, takes the
//! environment snapshot, sets up the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envcheck::config::{
    HttpServerConfig, LogFormat, ProcessConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT,
};
use envcheck::http::start_server;
use envcheck::{create_router, AppState};

/// envcheck: Diagnostic endpoints for deployment configuration
#[derive(Parser, Debug)]
#[command(name = "envcheck", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "envcheck=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    // Environment snapshot, never re-read
    let config = ProcessConfig::from_env();

    // Presence only; values may be secrets
    tracing::info!(
        environment = %config.environment,
        debug_mode = config.debug_mode,
        database_url_set = config.has_database_url(),
        api_secret_key_set = config.has_api_secret_key(),
        "Loaded configuration"
    );
    if !config.is_complete() {
        tracing::warn!(
            missing = ?config.missing_variables(),
            "Required environment variables are not set"
        );
    }

    let app = create_router(AppState::new(config));

    let http = HttpServerConfig {
        host: args.host,
        port: args.port,
    };
    start_server(app, &http).await?;

    Ok(())
}
