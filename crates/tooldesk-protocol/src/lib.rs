//! # tooldesk-protocol
//!
//! JSON-RPC 2.0 and MCP method payload definitions, plus the input schema
//! used to validate tool arguments before a handler runs.

pub mod jsonrpc;
pub mod mcp;
pub mod schema;

pub use jsonrpc::*;
pub use mcp::methods;
pub use schema::{ArgType, FieldError, InputSchema, SchemaError, ToolArgument};
