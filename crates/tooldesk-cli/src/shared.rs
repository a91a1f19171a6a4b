//! Shared helpers used across CLI commands.

use std::sync::Arc;

use tooldesk_dispatch::{ResourceCatalog, ToolRegistry};
use tooldesk_mcp::McpHandler;
use tooldesk_types::ServerInfo;

/// Builds the registry and catalog holding every built-in tool and resource.
///
/// # Errors
///
/// Returns an error if a built-in fails to register.
pub fn builtin_catalog() -> anyhow::Result<(ToolRegistry, ResourceCatalog)> {
    let mut tools = ToolRegistry::new();
    let mut resources = ResourceCatalog::new();
    tooldesk_tools::register_builtins(&mut tools, &mut resources)?;
    tracing::debug!(
        tools = tools.len(),
        resources = resources.list().len(),
        "built-ins registered"
    );
    Ok((tools, resources))
}

/// Builds an `McpHandler` over the frozen built-ins.
///
/// # Errors
///
/// Returns an error if a built-in fails to register.
pub fn build_handler(info: ServerInfo) -> anyhow::Result<McpHandler> {
    let (tools, resources) = builtin_catalog()?;
    Ok(McpHandler::new(info, Arc::new(tools), Arc::new(resources)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_register_cleanly() {
        let (tools, resources) = builtin_catalog().expect("builtins");
        assert_eq!(tools.len(), 2);
        assert_eq!(resources.list().len(), 1);
    }

    #[test]
    fn handler_carries_info() {
        let handler = build_handler(ServerInfo::new("cli", "0.1.0")).expect("handler");
        assert_eq!(handler.info().name, "cli");
        assert!(handler.tools().get("calculate").is_some());
    }
}
