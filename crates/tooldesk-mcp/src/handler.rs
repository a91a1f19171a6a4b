//! The MCP request dispatcher.

use std::sync::Arc;

use tracing::{debug, warn};

use tooldesk_dispatch::{ResourceCatalog, ToolRegistry};
use tooldesk_protocol::{
    error_codes, methods, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcOutput,
    JsonRpcRequest,
};
use tooldesk_types::ServerInfo;

use crate::dispatch;

/// Routes JSON-RPC requests to MCP method implementations.
///
/// Holds only shared, read-only state, so one instance serves every
/// connection.
#[derive(Debug, Clone)]
pub struct McpHandler {
    info: ServerInfo,
    tools: Arc<ToolRegistry>,
    resources: Arc<ResourceCatalog>,
}

impl McpHandler {
    /// Creates a handler over a frozen registry and catalog.
    pub fn new(info: ServerInfo, tools: Arc<ToolRegistry>, resources: Arc<ResourceCatalog>) -> Self {
        Self {
            info,
            tools,
            resources,
        }
    }

    /// Identity reported by `initialize`.
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// The tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// The resource catalog.
    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    /// Dispatches one request and returns its reply.
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        let params = &request.params;
        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id, params, &self.info),
            methods::PING => dispatch::ping::handle_ping(id),
            methods::TOOLS_LIST => dispatch::tools::handle_tools_list(id, &self.tools),
            methods::TOOLS_CALL => dispatch::tools::handle_tools_call(id, params, &self.tools).await,
            methods::RESOURCES_LIST => {
                dispatch::resources::handle_resources_list(id, &self.resources)
            }
            methods::RESOURCES_READ => {
                dispatch::resources::handle_resources_read(id, params, &self.resources)
            }
            other => {
                warn!(method = other, "unknown method");
                JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("method not found: {other}"),
                )
                .into()
            }
        }
    }

    /// Handles a notification. Notifications are never answered.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => debug!("client initialized"),
            other => debug!(method = other, "ignoring notification"),
        }
    }
}
