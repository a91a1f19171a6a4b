//! Dispatcher error types.

use thiserror::Error;

use tooldesk_protocol::{FieldError, SchemaError};
use tooldesk_types::DeskError;

/// Arguments rejected before (or while) decoding them for a handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.fields))]
pub struct ValidationError {
    /// Every field that failed, in schema order.
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// A validation error about the payload as a whole.
    pub fn payload(reason: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new("$", reason)],
        }
    }

    /// Names of the offending fields.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

impl From<SchemaError> for ValidationError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::ValidationFailed { fields } => Self { fields },
            SchemaError::InvalidSchema { message } => Self::payload(message),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        Self::payload(e.to_string())
    }
}

fn render(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from registering or invoking tools and reading resources.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool name does not satisfy the naming rules.
    #[error("invalid tool name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    /// The tool's input schema could not be built.
    #[error("invalid schema for tool '{tool}': {source}")]
    InvalidSchema {
        tool: String,
        #[source]
        source: SchemaError,
    },
    /// The resource URI is not of the form `scheme://path`.
    #[error("invalid resource uri '{uri}'")]
    InvalidUri { uri: String },
    /// A tool with this name is already registered.
    #[error("tool already registered: {name}")]
    DuplicateTool { name: String },
    /// A resource with this URI is already registered.
    #[error("resource already registered: {uri}")]
    DuplicateResource { uri: String },
    /// No tool is registered under this name.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    /// No resource is registered under this URI.
    #[error("unknown resource: {uri}")]
    UnknownResource { uri: String },
    /// The arguments failed the tool's schema.
    #[error("invalid arguments for tool '{tool}': {source}")]
    Validation {
        tool: String,
        #[source]
        source: ValidationError,
    },
}

impl From<DispatchError> for DeskError {
    fn from(e: DispatchError) -> Self {
        let message = e.to_string();
        match e {
            DispatchError::UnknownTool { name } => {
                DeskError::not_found(message).with_context(format!("tool: {name}"))
            }
            DispatchError::UnknownResource { uri } => {
                DeskError::not_found(message).with_context(format!("uri: {uri}"))
            }
            DispatchError::DuplicateTool { name } => {
                DeskError::already_exists(message).with_context(format!("tool: {name}"))
            }
            DispatchError::DuplicateResource { uri } => {
                DeskError::already_exists(message).with_context(format!("uri: {uri}"))
            }
            DispatchError::InvalidName { name, .. } => {
                DeskError::invalid_input(message).with_context(format!("tool: {name}"))
            }
            DispatchError::InvalidSchema { tool, .. } | DispatchError::Validation { tool, .. } => {
                DeskError::invalid_input(message).with_context(format!("tool: {tool}"))
            }
            DispatchError::InvalidUri { uri } => {
                DeskError::invalid_input(message).with_context(format!("uri: {uri}"))
            }
        }
    }
}
