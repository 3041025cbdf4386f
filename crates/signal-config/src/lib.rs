//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, ChecklistsConfig, LoggingConfig, StorageSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Prefix of environment variable overrides, e.g.
/// `SIGNAL_DESK__STORAGE__REPORTS_DIR`.
pub const ENV_PREFIX: &str = "SIGNAL_DESK";

/// Load configuration from file and environment.
///
/// A missing file is allowed; defaults apply to anything not set.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("checklists.enabled")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Load configuration and reject invalid values.
pub fn load_validated(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = load_config(path)?;
    config
        .validate()
        .map_err(|e| ConfigError::Message(e.to_string()))?;
    Ok(config)
}
