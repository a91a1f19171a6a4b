//! # tooldesk-tools
//!
//! The tools and resources a stock tooldesk server exposes: `add`,
//! `calculate`, and the `about://server` resource.

pub mod about;
pub mod arithmetic;
pub mod number;

use tooldesk_dispatch::{DispatchError, ResourceCatalog, ToolRegistry};

pub use arithmetic::Operation;
pub use number::format_number;

/// Registers every built-in tool and resource.
///
/// # Errors
///
/// Returns `DispatchError::DuplicateTool` / `DuplicateResource` if the
/// registry or catalog already holds one of the built-in names.
pub fn register_builtins(
    tools: &mut ToolRegistry,
    resources: &mut ResourceCatalog,
) -> Result<(), DispatchError> {
    arithmetic::register(tools)?;
    about::register(resources)
}
