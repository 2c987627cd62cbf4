//! HTTP server module.
//!
//! Serves the diagnostic router over plain HTTP/1.1 and drains in-flight
//! requests on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
