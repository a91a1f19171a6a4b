//! Declarative input schemas for tool arguments.
//!
//! An [`InputSchema`] is a flat list of named arguments. It renders to the
//! JSON Schema object advertised by `tools/list` and validates incoming
//! argument payloads, reporting every offending field at once.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// JSON type of a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    Number,
    Integer,
    String,
    Boolean,
    Object,
    Array,
}

impl ArgType {
    /// The JSON Schema `type` keyword for this argument type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_number(),
            Self::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of one tool argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArgument {
    /// Argument name.
    pub name: String,
    /// JSON type.
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    /// Human-readable description.
    pub description: String,
    /// Whether this argument must be present (and non-null).
    #[serde(default)]
    pub required: bool,
    /// Closed set of accepted string values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl ToolArgument {
    /// A required argument of the given type.
    pub fn new(name: impl Into<String>, arg_type: ArgType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type,
            description: description.into(),
            required: true,
            allowed_values: None,
        }
    }

    /// A required `number` argument.
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ArgType::Number, description)
    }

    /// A required `string` argument.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ArgType::String, description)
    }

    /// A required `string` argument restricted to `values`.
    pub fn one_of<I, S>(name: impl Into<String>, description: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut arg = Self::string(name, description);
        arg.allowed_values = Some(values.into_iter().map(Into::into).collect());
        arg
    }

    /// Marks the argument as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn check(&self, value: &Value) -> Option<String> {
        if !self.arg_type.accepts(value) {
            return Some(format!("expected {}, got {}", self.arg_type, json_type_name(value)));
        }
        if let (Some(allowed), Some(s)) = (&self.allowed_values, value.as_str()) {
            if !allowed.iter().any(|a| a == s) {
                return Some(format!(
                    "must be one of [{}], got {s:?}",
                    allowed.join(", ")
                ));
            }
        }
        None
    }

    fn to_json_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), Value::String(self.arg_type.as_str().into()));
        if let Some(allowed) = &self.allowed_values {
            prop.insert(
                "enum".into(),
                Value::Array(allowed.iter().cloned().map(Value::String).collect()),
            );
        }
        prop.insert("description".into(), Value::String(self.description.clone()));
        Value::Object(prop)
    }
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Argument name (`$` for the payload as a whole).
    pub field: String,
    /// Why it was rejected.
    pub reason: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Schema construction and validation errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input does not match the expected schema.
    #[error("schema validation failed: {}", join_fields(.fields))]
    ValidationFailed { fields: Vec<FieldError> },
    /// The schema itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ordered set of tool arguments with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSchema {
    arguments: Vec<ToolArgument>,
}

impl InputSchema {
    /// Builds a schema from its arguments.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` on duplicate or empty argument
    /// names, or when `allowed_values` is set on a non-string argument.
    pub fn new(arguments: Vec<ToolArgument>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for arg in &arguments {
            if arg.name.is_empty() {
                return Err(SchemaError::InvalidSchema {
                    message: "argument names cannot be empty".into(),
                });
            }
            if !seen.insert(arg.name.as_str()) {
                return Err(SchemaError::InvalidSchema {
                    message: format!("duplicate argument: {}", arg.name),
                });
            }
            if arg.allowed_values.is_some() && arg.arg_type != ArgType::String {
                return Err(SchemaError::InvalidSchema {
                    message: format!("allowed values on non-string argument: {}", arg.name),
                });
            }
        }
        Ok(Self { arguments })
    }

    /// A schema that accepts any object.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The arguments, in declaration order.
    pub fn arguments(&self) -> &[ToolArgument] {
        &self.arguments
    }

    /// Renders the schema as a JSON Schema object.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .arguments
            .iter()
            .map(|a| (a.name.clone(), a.to_json_schema()))
            .collect();
        let required: Vec<Value> = self
            .arguments
            .iter()
            .filter(|a| a.required)
            .map(|a| Value::String(a.name.clone()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        Value::Object(schema)
    }

    /// Validates a raw argument payload.
    ///
    /// `null` is treated as an empty object. Unknown keys are kept, and
    /// optional keys set to `null` are treated as absent and dropped.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` listing every offending field.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, SchemaError> {
        let mut object = match input {
            Value::Null => Map::new(),
            Value::Object(map) => map.clone(),
            other => {
                return Err(SchemaError::ValidationFailed {
                    fields: vec![FieldError::new(
                        "$",
                        format!("arguments must be an object, got {}", json_type_name(other)),
                    )],
                })
            }
        };

        let mut fields = Vec::new();
        for arg in &self.arguments {
            match object.get(&arg.name) {
                None | Some(Value::Null) => {
                    if arg.required {
                        fields.push(FieldError::new(&arg.name, "is required"));
                    } else {
                        object.remove(&arg.name);
                    }
                }
                Some(value) => {
                    if let Some(reason) = arg.check(value) {
                        fields.push(FieldError::new(&arg.name, reason));
                    }
                }
            }
        }

        if fields.is_empty() {
            Ok(object)
        } else {
            Err(SchemaError::ValidationFailed { fields })
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
