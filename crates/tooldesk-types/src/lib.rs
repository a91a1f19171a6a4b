//! # tooldesk-types
//!
//! Domain types for the tooldesk tool server.
//! This crate contains pure data types with no dependencies beyond serde.

pub mod content;
pub mod error;
pub mod resource;
pub mod server;
pub mod tool;

pub use content::{ContentItem, ToolResult};
pub use error::{DeskError, ErrorKind};
pub use resource::{Resource, ResourceContents};
pub use server::ServerInfo;
pub use tool::ToolName;
