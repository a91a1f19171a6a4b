//! Tool identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

/// Maximum length of a tool name.
pub const MAX_TOOL_NAME_LEN: usize = 64;

/// Unique name of a tool within a registry.
///
/// Names are 1..=64 characters from `[A-Za-z0-9_-]`, e.g. `add` or
/// `calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Creates a new `ToolName`, validating the format.
    pub fn new(name: impl Into<String>) -> Result<Self, DeskError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeskError::invalid_input("tool name cannot be empty"));
        }
        if name.len() > MAX_TOOL_NAME_LEN {
            return Err(DeskError::invalid_input(format!(
                "tool name exceeds {MAX_TOOL_NAME_LEN} characters"
            )));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(DeskError::invalid_input(format!(
                "tool name contains invalid character {c:?}"
            )));
        }
        Ok(Self(name))
    }

    /// Returns the tool name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ToolName {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ToolName {
    type Error = DeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.0
    }
}

impl AsRef<str> for ToolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["add", "calculate", "fetch-url", "get_weather2"] {
            assert_eq!(ToolName::new(name).expect("valid").as_str(), name);
        }
    }

    #[test]
    fn empty_name_rejected() {
        assert!(ToolName::new("").is_err());
    }

    #[test]
    fn whitespace_and_punctuation_rejected() {
        assert!(ToolName::new("two words").is_err());
        assert!(ToolName::new("dotted.name").is_err());
        assert!(ToolName::new("slash/name").is_err());
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "a".repeat(MAX_TOOL_NAME_LEN + 1);
        assert!(ToolName::new(name).is_err());
        assert!(ToolName::new("a".repeat(MAX_TOOL_NAME_LEN)).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<ToolName, _> = serde_json::from_str("\"add\"");
        assert!(ok.is_ok());
        let bad: Result<ToolName, _> = serde_json::from_str("\"no spaces allowed\"");
        assert!(bad.is_err());
    }
}
