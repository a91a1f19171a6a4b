//! Property-based tests for input schema validation.

use proptest::prelude::*;
use serde_json::json;
use tooldesk_protocol::{InputSchema, SchemaError, ToolArgument};

fn two_numbers() -> InputSchema {
    InputSchema::new(vec![
        ToolArgument::number("a", "First number"),
        ToolArgument::number("b", "Second number"),
    ])
    .expect("schema")
}

proptest! {
    /// Any pair of finite numbers is accepted unchanged.
    #[test]
    fn finite_numbers_accepted(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
        let out = two_numbers().validate(&json!({"a": a, "b": b}));
        prop_assert!(out.is_ok());
        let out = out.expect("test: already checked");
        prop_assert_eq!(out["a"].as_f64(), Some(a));
        prop_assert_eq!(out["b"].as_f64(), Some(b));
    }

    /// Strings in numeric slots are always rejected, naming the field.
    #[test]
    fn strings_in_number_fields_rejected(s in "[a-z0-9]{0,12}") {
        let out = two_numbers().validate(&json!({"a": s, "b": 1}));
        match out {
            Err(SchemaError::ValidationFailed { fields }) => {
                prop_assert_eq!(fields.len(), 1);
                prop_assert_eq!(fields[0].field.as_str(), "a");
            }
            other => prop_assert!(false, "unexpected: {:?}", other),
        }
    }

    /// Enum arguments accept exactly their listed values.
    #[test]
    fn enum_accepts_only_listed(op in "[a-z]{1,10}") {
        let listed = ["add", "subtract", "multiply", "divide"];
        let schema = InputSchema::new(vec![ToolArgument::one_of("operation", "op", listed)])
            .expect("schema");
        let ok = schema.validate(&json!({"operation": op})).is_ok();
        prop_assert_eq!(ok, listed.contains(&op.as_str()));
    }
}
