//! Request/response JSON-RPC bridge over [`McpHandler`].
//!
//! One POST carries one JSON-RPC message; the reply is the response
//! body. No sessions and no streaming.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use tooldesk_mcp::McpHandler;
use tooldesk_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcOutput, JsonRpcRequest,
    RequestId, JSONRPC_VERSION,
};

use crate::transport::Transport;

/// Default cap on request bodies.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Serves MCP methods as plain JSON-RPC over POST.
#[derive(Debug, Clone)]
pub struct JsonRpcTransport {
    handler: Arc<McpHandler>,
    max_body_bytes: usize,
}

impl JsonRpcTransport {
    /// Creates a bridge with the default body limit.
    pub fn new(handler: Arc<McpHandler>) -> Self {
        Self::with_body_limit(handler, DEFAULT_MAX_BODY_BYTES)
    }

    /// Creates a bridge that rejects bodies above `max_body_bytes`.
    pub fn with_body_limit(handler: Arc<McpHandler>, max_body_bytes: usize) -> Self {
        Self {
            handler,
            max_body_bytes,
        }
    }

    async fn handle_body(&self, body: &[u8]) -> Response {
        let json_val: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => {
                let err = JsonRpcErrorResponse::without_id(error_codes::PARSE_ERROR, "Parse error");
                return reply(&err.into());
            }
        };
        if !json_val.is_object() {
            return invalid_request(None, "expected a single JSON object");
        }

        let id = match json_val.get("id") {
            None => return self.handle_notification(json_val),
            Some(Value::Null) => return invalid_request(None, "id must not be null"),
            Some(raw) => match serde_json::from_value::<RequestId>(raw.clone()) {
                Ok(id) => id,
                Err(_) => return invalid_request(None, "id must be a number or a string"),
            },
        };

        let request: JsonRpcRequest = match serde_json::from_value(json_val) {
            Ok(r) => r,
            Err(e) => return invalid_request(Some(id), &e.to_string()),
        };
        if request.jsonrpc != JSONRPC_VERSION {
            return invalid_request(Some(id), "jsonrpc must be \"2.0\"");
        }

        reply(&self.handler.dispatch(&request).await)
    }

    /// Only a well-formed 2.0 notification earns the empty 204.
    fn handle_notification(&self, json_val: Value) -> Response {
        match serde_json::from_value::<JsonRpcNotification>(json_val) {
            Ok(notif) if notif.jsonrpc == JSONRPC_VERSION => {
                self.handler.handle_notification(&notif);
                StatusCode::NO_CONTENT.into_response()
            }
            Ok(_) => invalid_request(None, "jsonrpc must be \"2.0\""),
            Err(e) => invalid_request(None, &e.to_string()),
        }
    }
}

#[async_trait]
impl Transport for JsonRpcTransport {
    async fn serve(&self, request: Request) -> Response {
        if request.method() != Method::POST {
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                "Method Not Allowed",
            )
                .into_response();
        }

        match to_bytes(request.into_body(), self.max_body_bytes).await {
            Ok(body) => self.handle_body(&body).await,
            Err(e) => {
                tracing::warn!(error = %e, limit = self.max_body_bytes, "request body rejected");
                (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").into_response()
            }
        }
    }
}

fn invalid_request(id: Option<RequestId>, detail: &str) -> Response {
    let message = format!("Invalid request: {detail}");
    let err = match id {
        Some(id) => JsonRpcErrorResponse::error(id, error_codes::INVALID_REQUEST, message),
        None => JsonRpcErrorResponse::without_id(error_codes::INVALID_REQUEST, message),
    };
    reply(&err.into())
}

fn reply(output: &JsonRpcOutput) -> Response {
    match output.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "cannot encode JSON-RPC reply");
            internal_error()
        }
    }
}

/// Hand-built `-32603` body for when the real reply cannot be encoded.
fn internal_error() -> Response {
    let body = json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": null,
        "error": { "code": error_codes::INTERNAL_ERROR, "message": "Internal error" }
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
