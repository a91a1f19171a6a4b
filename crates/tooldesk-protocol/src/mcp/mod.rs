//! MCP method payloads carried by the JSON-RPC bridge.

pub mod initialize;
pub mod resources;
pub mod tools;

pub use initialize::*;
pub use resources::*;
pub use tools::*;

/// MCP protocol method names.
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const PING: &str = "ping";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
    pub const RESOURCES_LIST: &str = "resources/list";
    pub const RESOURCES_READ: &str = "resources/read";
    pub const NOTIFICATIONS_INITIALIZED: &str = "notifications/initialized";
}
