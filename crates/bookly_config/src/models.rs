// --- File: crates/bookly_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16, // Loaded via PORT or BOOKLY__SERVER__PORT
    /// Origins allowed by the CORS layer. Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// --- Admin Config ---
// Passcode is loaded directly from env var: ADMIN_PASSCODE
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AdminConfig {
    #[serde(default, skip_serializing)]
    pub passcode: Option<String>,
}

/// Granularity of the fixed weekday slot list.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// One-hour slots, 09:00 to 17:00 with a lunch break.
    #[default]
    Hourly,
    /// Two-hour slots, 09:00 to 17:00.
    TwoHour,
}

// --- Scheduling Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub slot_policy: SlotPolicy,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}

impl AppConfig {
    /// Default configuration with the given admin passcode.
    pub fn for_passcode(passcode: impl Into<String>) -> Self {
        Self {
            admin: AdminConfig {
                passcode: Some(passcode.into()),
            },
            ..Self::default()
        }
    }

    /// The configured passcode, if it is present and non-blank.
    pub fn admin_passcode(&self) -> Option<&str> {
        self.admin
            .passcode
            .as_deref()
            .filter(|passcode| !passcode.trim().is_empty())
    }
}
