//! Handles the `resources/list` and `resources/read` MCP methods.

use serde_json::Value;

use tooldesk_dispatch::ResourceCatalog;
use tooldesk_protocol::mcp::{
    McpResourceDefinition, ResourcesListResult, ResourcesReadParams, ResourcesReadResult,
};
use tooldesk_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcOutput, RequestId};

use super::{invalid_params, respond};

pub(crate) fn handle_resources_list(id: RequestId, resources: &ResourceCatalog) -> JsonRpcOutput {
    let resources = resources
        .list()
        .iter()
        .map(McpResourceDefinition::from)
        .collect();
    respond(id, ResourcesListResult { resources })
}

pub(crate) fn handle_resources_read(
    id: RequestId,
    params: &Option<Value>,
    resources: &ResourceCatalog,
) -> JsonRpcOutput {
    let read = match params {
        Some(p) => match serde_json::from_value::<ResourcesReadParams>(p.clone()) {
            Ok(r) => r,
            Err(e) => return invalid_params(id, format!("invalid resources/read params: {e}")),
        },
        None => return invalid_params(id, "resources/read requires params"),
    };

    match resources.read(&read.uri) {
        Ok(contents) => respond(
            id,
            ResourcesReadResult {
                contents: vec![contents],
            },
        ),
        Err(e) => {
            tracing::debug!(uri = %read.uri, "resource not found");
            JsonRpcErrorResponse::error(id, error_codes::RESOURCE_NOT_FOUND, e.to_string()).into()
        }
    }
}
