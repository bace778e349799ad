// --- File: crates/services/bookly_backend/src/app_state.rs ---
use bookly_common::BooklyError;
use bookly_config::AppConfig;
use bookly_scheduling::SchedulingState;
use std::sync::Arc;

/// Application state built once at startup and shared by the routers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scheduling: Arc<SchedulingState>,
}

impl AppState {
    /// Fresh in-memory stores; fails when no admin passcode is configured.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, BooklyError> {
        let scheduling = Arc::new(SchedulingState::in_memory(&config)?);
        Ok(Self { config, scheduling })
    }
}
