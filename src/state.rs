// src/state.rs
use std::sync::Arc;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

/// Read-only per-process settings the handlers need.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub verbose_errors: bool,
}

impl AppState {
    pub fn new(verbose_errors: bool) -> Self {
        Self { verbose_errors }
    }
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self::new(config.verbose_errors)
    }
}
