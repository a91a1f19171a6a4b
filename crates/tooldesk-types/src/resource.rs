//! Read-only resources exposed by URI.

use serde::{Deserialize, Serialize};

/// A static resource: metadata plus its fixed text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Resource URI, e.g. `about://server`.
    pub uri: String,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// MIME type of `text`.
    pub mime_type: String,
    /// The resource body.
    pub text: String,
}

impl Resource {
    /// Snapshot of the resource body as returned by a read.
    pub fn contents(&self) -> ResourceContents {
        ResourceContents {
            uri: self.uri.clone(),
            mime_type: self.mime_type.clone(),
            text: self.text.clone(),
        }
    }
}

/// The result of reading a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContents {
    /// URI that was read.
    pub uri: String,
    /// MIME type of `text`.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Text body.
    pub text: String,
}
