//! MCP dispatch over the built-in tools and resources.

use std::sync::Arc;

use serde_json::{json, Value};

use tooldesk_dispatch::{ResourceCatalog, ToolRegistry};
use tooldesk_mcp::McpHandler;
use tooldesk_protocol::{error_codes, methods, JsonRpcNotification, JsonRpcRequest, RequestId};
use tooldesk_types::ServerInfo;

fn make_handler() -> McpHandler {
    let mut tools = ToolRegistry::new();
    let mut resources = ResourceCatalog::new();
    tooldesk_tools::register_builtins(&mut tools, &mut resources).expect("builtins");
    McpHandler::new(
        ServerInfo::new("test desk", "9.9.9"),
        Arc::new(tools),
        Arc::new(resources),
    )
}

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(RequestId::Number(id), method, params)
}

async fn call(handler: &McpHandler, req: JsonRpcRequest) -> Value {
    let json_str = handler.dispatch(&req).await.to_json().expect("ser");
    serde_json::from_str(&json_str).expect("de")
}

#[tokio::test]
async fn initialize_reports_server_info_and_capabilities() {
    let v = call(&make_handler(), rpc(methods::INITIALIZE, 1, None)).await;
    assert_eq!(v["id"], 1);
    assert_eq!(v["result"]["serverInfo"]["name"], "test desk");
    assert_eq!(v["result"]["serverInfo"]["version"], "9.9.9");
    assert!(v["result"]["capabilities"]["tools"].is_object());
    assert!(v["result"]["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn initialize_with_invalid_params_returns_error() {
    let v = call(
        &make_handler(),
        rpc(methods::INITIALIZE, 2, Some(json!({"protocolVersion": 123}))),
    )
    .await;
    assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn ping_returns_empty_object() {
    let v = call(&make_handler(), rpc(methods::PING, 3, None)).await;
    assert_eq!(v["result"], json!({}));
}

#[tokio::test]
async fn tools_list_in_registration_order() {
    let v = call(&make_handler(), rpc(methods::TOOLS_LIST, 4, None)).await;
    let names: Vec<&str> = v["result"]["tools"]
        .as_array()
        .expect("tools")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(names, vec!["add", "calculate"]);
    assert_eq!(
        v["result"]["tools"][1]["inputSchema"]["properties"]["operation"]["enum"],
        json!(["add", "subtract", "multiply", "divide"])
    );
}

#[tokio::test]
async fn tools_call_add() {
    let v = call(
        &make_handler(),
        rpc(
            methods::TOOLS_CALL,
            5,
            Some(json!({"name": "add", "arguments": {"a": 2, "b": 3}})),
        ),
    )
    .await;
    assert_eq!(v["result"]["content"][0]["type"], "text");
    assert_eq!(v["result"]["content"][0]["text"], "The sum of 2 + 3 = 5");
    assert_eq!(v["result"]["isError"], false);
}

#[tokio::test]
async fn tools_call_divide_by_zero_is_result_not_error() {
    let v = call(
        &make_handler(),
        rpc(
            methods::TOOLS_CALL,
            6,
            Some(json!({"name": "calculate", "arguments": {"operation": "divide", "a": 1, "b": 0}})),
        ),
    )
    .await;
    assert!(v.get("error").is_none());
    assert_eq!(v["result"]["isError"], true);
    assert_eq!(
        v["result"]["content"][0]["text"],
        "Error: Division by zero is not allowed"
    );
}

#[tokio::test]
async fn tools_call_unknown_tool() {
    let v = call(
        &make_handler(),
        rpc(
            methods::TOOLS_CALL,
            7,
            Some(json!({"name": "unknown_tool", "arguments": {}})),
        ),
    )
    .await;
    assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
    assert_eq!(v["error"]["message"], "unknown tool: unknown_tool");
}

#[tokio::test]
async fn tools_call_modulo_is_validation_error() {
    let v = call(
        &make_handler(),
        rpc(
            methods::TOOLS_CALL,
            8,
            Some(json!({"name": "calculate", "arguments": {"operation": "modulo", "a": 1, "b": 2}})),
        ),
    )
    .await;
    assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
    assert_eq!(v["error"]["data"]["fields"][0]["field"], "operation");
}

#[tokio::test]
async fn tools_call_params_not_an_object() {
    let v = call(
        &make_handler(),
        rpc(methods::TOOLS_CALL, 9, Some(json!("not an object"))),
    )
    .await;
    assert_eq!(v["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn resources_list_and_read() {
    let handler = make_handler();
    let list = call(&handler, rpc(methods::RESOURCES_LIST, 10, None)).await;
    assert_eq!(list["result"]["resources"][0]["uri"], "about://server");
    assert_eq!(list["result"]["resources"][0]["mimeType"], "text/plain");

    let read = call(
        &handler,
        rpc(methods::RESOURCES_READ, 11, Some(json!({"uri": "about://server"}))),
    )
    .await;
    assert_eq!(
        read["result"]["contents"][0]["text"],
        "This is a basic MCP server running on Cloudflare Workers"
    );
}

#[tokio::test]
async fn resources_read_unknown_uri() {
    let v = call(
        &make_handler(),
        rpc(methods::RESOURCES_READ, 12, Some(json!({"uri": "about://nobody"}))),
    )
    .await;
    assert_eq!(v["error"]["code"], error_codes::RESOURCE_NOT_FOUND);
}

#[tokio::test]
async fn unknown_method() {
    let v = call(&make_handler(), rpc("prompts/list", 13, None)).await;
    assert_eq!(v["error"]["code"], error_codes::METHOD_NOT_FOUND);
}

#[test]
fn handle_notification_does_not_panic() {
    let handler = make_handler();
    for method in [methods::NOTIFICATIONS_INITIALIZED, "notifications/cancelled"] {
        handler.handle_notification(&JsonRpcNotification {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params: None,
        });
    }
}
