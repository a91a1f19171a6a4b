//! # tooldesk-mcp
//!
//! MCP method dispatch (application layer).
//!
//! `McpHandler` routes JSON-RPC requests to the tool registry and the
//! resource catalog. It knows nothing about HTTP; transports feed it
//! parsed requests and serialize whatever it returns.

mod dispatch;
pub mod handler;

pub use handler::McpHandler;
pub use tooldesk_protocol::JsonRpcOutput;
