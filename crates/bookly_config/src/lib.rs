use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod models;
pub use models::*;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("admin passcode is not configured (set ADMIN_PASSCODE)")]
    MissingPasscode,
}

/// Values taken from plain environment variables, applied above every other source.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub port: Option<String>,
    pub admin_passcode: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").ok(),
            admin_passcode: env::var("ADMIN_PASSCODE").ok(),
        }
    }
}

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, `config/default`,
/// `config/<RUN_ENV>`, `BOOKLY__*` environment variables, then `PORT` and
/// `ADMIN_PASSCODE`. The config directory can be moved with `CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    load_config_from(&config_dir, &run_env, EnvOverrides::from_env())
}

pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    overrides: EnvOverrides,
) -> Result<AppConfig, ConfigLoadError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix("BOOKLY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_allowed_origins"),
        )
        .set_override_option("server.port", overrides.port)?
        .set_override_option("admin.passcode", overrides.admin_passcode)?;

    let config: AppConfig = builder.build()?.try_deserialize()?;
    if config.admin_passcode().is_none() {
        return Err(ConfigLoadError::MissingPasscode);
    }
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment once.
///
/// The path comes from `DOTENV_OVERRIDE`, else a first CLI argument starting
/// with `.env`, else `.env`. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
