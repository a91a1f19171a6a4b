//! Configuration schema types.

use serde::{Deserialize, Serialize};

use tooldesk_types::ServerInfo;

/// Top-level tooldesk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeskConfig {
    /// Identity reported to clients.
    #[serde(default)]
    pub server: ServerConfig,
    /// HTTP listener settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl ServerConfig {
    /// The identity as a domain value.
    pub fn info(&self) -> ServerInfo {
        ServerInfo::new(&self.name, &self.version)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

fn default_name() -> String {
    ServerInfo::default().name
}
fn default_version() -> String {
    ServerInfo::default().version
}

/// `[http]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port (0 picks a free port).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted JSON-RPC request body.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8787
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "tooldesk_dispatch=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
