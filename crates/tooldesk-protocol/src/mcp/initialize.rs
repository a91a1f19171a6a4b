//! MCP `initialize` payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tooldesk_types::ServerInfo;

/// Protocol revision announced in every `initialize` reply.
pub const PROTOCOL_VERSION: &str = "2025-03-26";

/// A capability with no options; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {}

/// What this server offers. Absent entries are left out of the reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Capability>,
}

/// Who is connecting, as the client describes itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// `initialize` params. Client capabilities are kept as raw JSON and not
/// interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: Value,
    pub client_info: ClientInfo,
}

/// `initialize` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}
