//! JSON-RPC 2.0 envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only protocol version accepted and emitted.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Request ID.
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 notification (no id, never answered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Reply carrying a method result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Echo of the request id.
    pub id: RequestId,
    /// Result value.
    pub result: Value,
}

/// Reply carrying an error object.
///
/// `id` is `None` (serialized as `null`) when the request could not be
/// parsed far enough to recover its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Echo of the request id.
    pub id: Option<RequestId>,
    /// Error details.
    pub error: JsonRpcError,
}

/// The `error` member of an error reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Short description of the failure.
    pub message: String,
    /// Machine-readable details, e.g. offending fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A request id: JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric ID.
    Number(i64),
    /// String ID.
    String(String),
}

/// Either kind of reply to a request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonRpcOutput {
    /// The method succeeded.
    Success(JsonRpcResponse),
    /// The method failed.
    Error(JsonRpcErrorResponse),
}

/// Standard JSON-RPC error codes, plus the MCP resource extension.
pub mod error_codes {
    /// Body is not JSON.
    pub const PARSE_ERROR: i32 = -32700;
    /// JSON, but not a request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// No such method.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Params rejected, including unknown tools and schema failures.
    pub const INVALID_PARAMS: i32 = -32602;
    /// The server failed to build a reply.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Requested resource URI is not registered.
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

impl JsonRpcRequest {
    /// Builds a request with the current protocol version.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Wraps a method result.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response for a known request.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::build(Some(id), code, message)
    }

    /// Creates an error response whose request id is unknown.
    pub fn without_id(code: i32, message: impl Into<String>) -> Self {
        Self::build(None, code, message)
    }

    /// Attaches structured `data` to the error.
    pub fn with_data(mut self, data: Value) -> Self {
        self.error.data = Some(data);
        self
    }

    fn build(id: Option<RequestId>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }
}

impl JsonRpcOutput {
    /// Serializes the output to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the result value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether this output is an error response.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<JsonRpcResponse> for JsonRpcOutput {
    fn from(r: JsonRpcResponse) -> Self {
        Self::Success(r)
    }
}

impl From<JsonRpcErrorResponse> for JsonRpcOutput {
    fn from(e: JsonRpcErrorResponse) -> Self {
        Self::Error(e)
    }
}
