//! envcheck - deployment configuration diagnostics over HTTP
//!
//! Reads `DATABASE_URL`, `API_SECRET_KEY`, `DEBUG_MODE` and `ENVIRONMENT`
//! once at startup and serves read-only JSON reports describing what the
//! deployment injected, without ever exposing secret values.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
