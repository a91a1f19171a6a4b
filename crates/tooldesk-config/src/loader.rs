//! Configuration loader (defaults + file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use tooldesk_types::DeskError;

use crate::schema::DeskConfig;

/// Prefix of environment overrides, e.g. `TOOLDESK_HTTP__PORT=9000`.
pub const ENV_PREFIX: &str = "TOOLDESK_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: String },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// The merged configuration is unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for DeskError {
    fn from(e: ConfigError) -> Self {
        let message = e.to_string();
        match e {
            ConfigError::NotFound { path } => {
                DeskError::not_found(message).with_context(format!("config: {path}"))
            }
            ConfigError::Load(_) | ConfigError::Invalid(_) => DeskError::invalid_input(message),
        }
    }
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given; it must exist)
/// 3. Environment variables (`TOOLDESK_` prefix, `__` between section and key)
///
/// # Errors
///
/// Returns `ConfigError` if the file is missing, a layer fails to parse,
/// or the result fails validation.
pub fn load_config(config_path: Option<&Path>) -> Result<DeskConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(DeskConfig::default()));

    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: DeskConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DeskConfig) -> Result<(), ConfigError> {
    if config.http.max_body_bytes == 0 {
        return Err(ConfigError::Invalid(
            "http.max_body_bytes must be greater than zero".into(),
        ));
    }
    if config.server.name.trim().is_empty() {
        return Err(ConfigError::Invalid("server.name cannot be empty".into()));
    }
    Ok(())
}
