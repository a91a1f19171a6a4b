//! # tooldesk-config
//!
//! Configuration for tooldesk.
//! Layered: defaults -> TOML file -> `TOOLDESK_*` environment variables.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, ENV_PREFIX};
pub use schema::{DeskConfig, HttpConfig, LogFormat, LoggingConfig, ServerConfig};
