//! Server identity.

use serde::{Deserialize, Serialize};

/// Name and version the server reports to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl ServerInfo {
    /// Creates a new `ServerInfo`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new("My MCP Server", "1.0.0")
    }
}
