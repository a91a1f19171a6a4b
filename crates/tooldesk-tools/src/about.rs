//! The `about://server` resource.

use tooldesk_dispatch::{DispatchError, ResourceCatalog};
use tooldesk_types::Resource;

/// URI of the informational resource.
pub const ABOUT_URI: &str = "about://server";

/// Fixed body of the informational resource.
pub const ABOUT_TEXT: &str = "This is a basic MCP server running on Cloudflare Workers";

/// The informational resource.
pub fn about_resource() -> Resource {
    Resource {
        uri: ABOUT_URI.to_string(),
        name: "About this server".to_string(),
        description: Some("Information about this MCP server".to_string()),
        mime_type: "text/plain".to_string(),
        text: ABOUT_TEXT.to_string(),
    }
}

/// Registers `about://server`.
///
/// # Errors
///
/// Returns `DispatchError::DuplicateResource` if the URI is taken.
pub fn register(resources: &mut ResourceCatalog) -> Result<(), DispatchError> {
    resources.register(about_resource())
}
