//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ProcessConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the environment snapshot taken at startup. Handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProcessConfig>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
