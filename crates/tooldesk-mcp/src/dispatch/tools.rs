//! Handles the `tools/list` and `tools/call` MCP methods.

use serde_json::{json, Value};

use tooldesk_dispatch::{DispatchError, ToolRegistry};
use tooldesk_protocol::mcp::{McpToolDefinition, ToolsCallParams, ToolsListResult};
use tooldesk_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcOutput, RequestId};

use super::{invalid_params, respond};

/// Handles the `tools/list` request.
pub(crate) fn handle_tools_list(id: RequestId, tools: &ToolRegistry) -> JsonRpcOutput {
    let definitions = tools
        .definitions()
        .iter()
        .map(|d| McpToolDefinition {
            name: d.name.to_string(),
            description: Some(d.description.clone()),
            input_schema: d.input_schema.to_json_schema(),
        })
        .collect();

    respond(id, ToolsListResult { tools: definitions })
}

/// Handles the `tools/call` request.
///
/// Handler-level failures come back as a successful reply carrying an
/// `isError` result; lookup and validation failures are protocol errors.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    tools: &ToolRegistry,
) -> JsonRpcOutput {
    let call = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(c) => c,
            Err(e) => return invalid_params(id, format!("invalid tools/call params: {e}")),
        },
        None => return invalid_params(id, "tools/call requires params"),
    };

    match tools.invoke(&call.name, call.arguments).await {
        Ok(result) => respond(id, result),
        Err(e) => {
            let reply = JsonRpcErrorResponse::error(id, error_codes::INVALID_PARAMS, e.to_string());
            match &e {
                DispatchError::Validation { tool, source } => reply
                    .with_data(json!({ "tool": tool, "fields": source.fields }))
                    .into(),
                _ => reply.into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tooldesk_dispatch::typed;
    use tooldesk_protocol::{InputSchema, ToolArgument};
    use tooldesk_types::ToolResult;

    #[derive(Deserialize)]
    struct Shout {
        text: String,
    }

    fn registry() -> ToolRegistry {
        let mut reg = ToolRegistry::new();
        let schema =
            InputSchema::new(vec![ToolArgument::string("text", "What to shout")]).expect("schema");
        reg.register(
            "shout",
            "Upper-cases text",
            schema,
            typed(|s: Shout| async move { ToolResult::text(s.text.to_uppercase()) }),
        )
        .expect("register");
        reg
    }

    fn to_value(out: JsonRpcOutput) -> Value {
        serde_json::to_value(out).expect("ser")
    }

    #[test]
    fn list_renders_input_schema() {
        let v = to_value(handle_tools_list(RequestId::Number(1), &registry()));
        let tool = &v["result"]["tools"][0];
        assert_eq!(tool["name"], "shout");
        assert_eq!(tool["inputSchema"]["properties"]["text"]["type"], "string");
        assert_eq!(tool["inputSchema"]["required"], json!(["text"]));
    }

    #[test]
    fn list_on_empty_registry() {
        let v = to_value(handle_tools_list(RequestId::Number(1), &ToolRegistry::new()));
        assert_eq!(v["result"]["tools"], json!([]));
    }

    #[tokio::test]
    async fn call_returns_tool_result() {
        let params = Some(json!({"name": "shout", "arguments": {"text": "hey"}}));
        let v = to_value(handle_tools_call(RequestId::Number(2), &params, &registry()).await);
        assert_eq!(v["result"]["content"][0]["text"], "HEY");
        assert_eq!(v["result"]["isError"], false);
    }

    #[tokio::test]
    async fn validation_failure_carries_fields() {
        let params = Some(json!({"name": "shout", "arguments": {}}));
        let v = to_value(handle_tools_call(RequestId::Number(3), &params, &registry()).await);
        assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
        assert_eq!(v["error"]["data"]["tool"], "shout");
        assert_eq!(v["error"]["data"]["fields"][0]["field"], "text");
        assert_eq!(v["error"]["data"]["fields"][0]["reason"], "is required");
    }

    #[tokio::test]
    async fn missing_params_is_invalid() {
        let v = to_value(handle_tools_call(RequestId::Number(4), &None, &registry()).await);
        assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
    }
}
