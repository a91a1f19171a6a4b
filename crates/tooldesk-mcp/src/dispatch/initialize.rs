//! Handles the `initialize` MCP method.

use serde_json::Value;

use tooldesk_protocol::mcp::{
    Capability, InitializeParams, InitializeResult, ServerCapabilities, PROTOCOL_VERSION,
};
use tooldesk_protocol::{JsonRpcOutput, RequestId};
use tooldesk_types::ServerInfo;

use super::{invalid_params, respond};

/// Handles the `initialize` request and returns the server capabilities.
///
/// Params are optional; when present they must be well formed.
pub(crate) fn handle_initialize(
    id: RequestId,
    params: &Option<Value>,
    info: &ServerInfo,
) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(p) => tracing::info!(
                client = %p.client_info.name,
                client_version = %p.client_info.version,
                protocol = %p.protocol_version,
                "client connected"
            ),
            Err(e) => return invalid_params(id, format!("invalid initialize params: {e}")),
        }
    }

    respond(
        id,
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(Capability {}),
                resources: Some(Capability {}),
            },
            server_info: info.clone(),
        },
    )
}
