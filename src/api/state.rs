//! Application state for the timesheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::PayrollSettings;

/// Shared application state.
///
/// Holds the server's payroll settings, loaded once at startup and read by
/// every request that does not bring its own.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the settings a request should use: its own when supplied,
    /// otherwise the server's.
    pub fn effective_settings(&self, requested: Option<PayrollSettings>) -> PayrollSettings {
        requested.unwrap_or_else(|| self.config.settings().clone())
    }
}
