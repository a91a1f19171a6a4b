//! # tooldesk-dispatch
//!
//! The tool dispatcher: a registry mapping tool names to an input schema
//! and a handler, plus a read-only catalog of static resources.
//!
//! Both are populated at startup and then shared behind an `Arc`; neither
//! holds per-call mutable state, so concurrent invocations never contend.

pub mod error;
pub mod handler;
pub mod registry;
pub mod resources;

pub use error::{DispatchError, ValidationError};
pub use handler::{typed, ToolHandler, TypedHandler};
pub use registry::{ToolDefinition, ToolRegistry};
pub use resources::ResourceCatalog;
