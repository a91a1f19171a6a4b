//! MCP method dispatch functions.
//!
//! Each sub-module handles one family of methods as free functions,
//! keeping `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod ping;
pub(crate) mod resources;
pub(crate) mod tools;

use serde::Serialize;

use tooldesk_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcOutput, JsonRpcResponse, RequestId};

/// Wraps a serializable method result in a success reply.
pub(crate) fn respond<T: Serialize>(id: RequestId, result: T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(id, v).into(),
        Err(e) => {
            JsonRpcErrorResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()).into()
        }
    }
}

/// An `invalid params` reply.
pub(crate) fn invalid_params(id: RequestId, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcErrorResponse::error(id, error_codes::INVALID_PARAMS, message).into()
}
