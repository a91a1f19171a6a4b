//! HTTP adapter for tooldesk.
//!
//! The router owns two [`Transport`]s and forwards `/sse*` and `/mcp*`
//! to them untouched; `/` answers with the server identity. The default
//! transport is a request/response JSON-RPC bridge over `McpHandler`.

mod error;
pub mod jsonrpc;
pub mod router;
pub mod server;
pub mod transport;

pub use error::HttpTransportError;
pub use jsonrpc::JsonRpcTransport;
pub use router::{build_router, AppState};
pub use server::HttpServer;
pub use transport::Transport;
