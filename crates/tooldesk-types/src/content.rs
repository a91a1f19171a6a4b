//! Tool call results.

use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// A single content item in a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Plain text.
    Text { text: String },
}

impl ContentItem {
    /// Creates a text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns the text of a text item.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// Outcome of a tool invocation.
///
/// The content sequence is never empty, so an error result always carries a
/// human-readable message. Domain failures (e.g. division by zero) are
/// reported as a result with `is_error` set, never as a Rust error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawToolResult")]
pub struct ToolResult {
    content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    is_error: bool,
}

impl ToolResult {
    /// A successful result with a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
            is_error: false,
        }
    }

    /// A failed result with a single text item.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
            is_error: true,
        }
    }

    /// Builds a result from several items.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `content` is empty.
    pub fn from_items(content: Vec<ContentItem>, is_error: bool) -> Result<Self, DeskError> {
        if content.is_empty() {
            return Err(DeskError::invalid_input(
                "tool result content must not be empty",
            ));
        }
        Ok(Self { content, is_error })
    }

    /// The content items, in order.
    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    /// Whether the tool reported a failure.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Concatenates every text item, separated by newlines.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentItem::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Deserialize)]
struct RawToolResult {
    content: Vec<ContentItem>,
    #[serde(default, rename = "isError")]
    is_error: bool,
}

impl TryFrom<RawToolResult> for ToolResult {
    type Error = DeskError;

    fn try_from(raw: RawToolResult) -> Result<Self, Self::Error> {
        Self::from_items(raw.content, raw.is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_result_wire_shape() {
        let r = ToolResult::text("ok");
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(
            v,
            serde_json::json!({"content": [{"type": "text", "text": "ok"}], "isError": false})
        );
    }

    #[test]
    fn error_result_is_flagged() {
        let r = ToolResult::error("boom");
        assert!(r.is_error());
        assert_eq!(r.joined_text(), "boom");
    }

    #[test]
    fn empty_content_rejected() {
        assert!(ToolResult::from_items(vec![], true).is_err());
        let parsed: Result<ToolResult, _> =
            serde_json::from_str(r#"{"content":[],"isError":true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_is_error_defaults_false() {
        let parsed: ToolResult =
            serde_json::from_str(r#"{"content":[{"type":"text","text":"hi"}]}"#).expect("de");
        assert!(!parsed.is_error());
    }

    #[test]
    fn joined_text_keeps_order() {
        let r = ToolResult::from_items(
            vec![ContentItem::text("a"), ContentItem::text("b")],
            false,
        )
        .expect("non-empty");
        assert_eq!(r.joined_text(), "a\nb");
    }
}
