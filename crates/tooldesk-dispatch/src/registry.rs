//! The tool registry: name → (description, input schema, handler).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use tooldesk_protocol::InputSchema;
use tooldesk_types::{ToolName, ToolResult};

use crate::error::DispatchError;
use crate::handler::ToolHandler;

/// A registered tool.
#[derive(Clone)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: ToolName,
    /// Human-readable description.
    pub description: String,
    /// Schema the arguments must satisfy.
    pub input_schema: InputSchema,
    handler: Arc<dyn ToolHandler>,
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Registry of tools, populated at startup and read-only afterwards.
///
/// Wrap it in an `Arc` once registration is done; `invoke` only needs
/// `&self`, so any number of tasks may call it concurrently.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<ToolName, usize>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidName` if `name` is not a valid
    /// [`ToolName`] and `DispatchError::DuplicateTool` if it is taken.
    pub fn register(
        &mut self,
        name: &str,
        description: impl Into<String>,
        input_schema: InputSchema,
        handler: impl ToolHandler + 'static,
    ) -> Result<(), DispatchError> {
        let name = ToolName::new(name).map_err(|e| DispatchError::InvalidName {
            name: name.to_string(),
            reason: e.message,
        })?;
        if self.index.contains_key(&name) {
            return Err(DispatchError::DuplicateTool {
                name: name.to_string(),
            });
        }

        debug!(tool = %name, "registering tool");
        self.index.insert(name.clone(), self.tools.len());
        self.tools.push(ToolDefinition {
            name,
            description: description.into(),
            input_schema,
            handler: Arc::new(handler),
        });
        Ok(())
    }

    /// Registered tools in registration order.
    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        // Names that fail validation can never have been registered.
        let key = ToolName::new(name).ok()?;
        self.index.get(&key).map(|&i| &self.tools[i])
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validates `args` against the tool's schema and runs its handler.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownTool` if no tool has this name and
    /// `DispatchError::Validation` if the arguments are rejected. A
    /// handler-level failure is not an error: it comes back as a
    /// `ToolResult` with `is_error` set.
    #[tracing::instrument(skip(self, args), fields(tool = %name))]
    pub async fn invoke(&self, name: &str, args: Value) -> Result<ToolResult, DispatchError> {
        let tool = self.get(name).ok_or_else(|| DispatchError::UnknownTool {
            name: name.to_string(),
        })?;

        let validated = tool.input_schema.validate(&args).map_err(|e| {
            let err = DispatchError::Validation {
                tool: name.to_string(),
                source: e.into(),
            };
            warn!(error = %err, "arguments rejected");
            err
        })?;

        let result = tool
            .handler
            .call(validated)
            .await
            .map_err(|source| DispatchError::Validation {
                tool: name.to_string(),
                source,
            })?;

        debug!(is_error = result.is_error(), "tool finished");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::typed;
    use serde::Deserialize;
    use serde_json::json;
    use tooldesk_protocol::ToolArgument;

    #[derive(Deserialize)]
    struct Echo {
        text: String,
    }

    fn echo_registry() -> ToolRegistry {
        let mut reg = ToolRegistry::new();
        let schema = InputSchema::new(vec![ToolArgument::string("text", "Text to echo")])
            .expect("schema");
        reg.register(
            "echo",
            "Echo text back",
            schema,
            typed(|e: Echo| async move { ToolResult::text(e.text) }),
        )
        .expect("register");
        reg
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut reg = echo_registry();
        let err = reg
            .register(
                "echo",
                "again",
                InputSchema::empty(),
                typed(|_: Echo| async { ToolResult::text("x") }),
            )
            .expect_err("duplicate");
        assert!(matches!(err, DispatchError::DuplicateTool { .. }));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn invalid_name_rejected() {
        let mut reg = ToolRegistry::new();
        let err = reg
            .register(
                "has space",
                "bad",
                InputSchema::empty(),
                typed(|_: Echo| async { ToolResult::text("x") }),
            )
            .expect_err("invalid");
        assert!(matches!(err, DispatchError::InvalidName { .. }));
        assert!(reg.is_empty());
    }

    #[test]
    fn get_with_malformed_name_is_none() {
        assert!(echo_registry().get("not a name").is_none());
    }

    #[tokio::test]
    async fn invoke_runs_handler() {
        let out = echo_registry()
            .invoke("echo", json!({"text": "hello"}))
            .await
            .expect("invoke");
        assert_eq!(out.joined_text(), "hello");
        assert!(!out.is_error());
    }

    #[tokio::test]
    async fn invoke_unknown_tool() {
        let err = echo_registry()
            .invoke("missing", json!({}))
            .await
            .expect_err("unknown");
        assert!(matches!(err, DispatchError::UnknownTool { ref name } if name == "missing"));
    }

    #[tokio::test]
    async fn invoke_invalid_args() {
        let err = echo_registry()
            .invoke("echo", json!({"text": 5}))
            .await
            .expect_err("invalid");
        match err {
            DispatchError::Validation { tool, source } => {
                assert_eq!(tool, "echo");
                assert_eq!(source.field_names(), vec!["text"]);
            }
            other => panic!("unexpected: {other}"),
        }
    }
}
