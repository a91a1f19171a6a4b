//! `add` and `calculate`.

use std::fmt;

use serde::Deserialize;

use tooldesk_dispatch::{typed, DispatchError, ToolRegistry};
use tooldesk_protocol::{InputSchema, ToolArgument};
use tooldesk_types::ToolResult;

use crate::number::format_number;

/// Text returned when `calculate` is asked to divide by zero.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero is not allowed";

/// Arithmetic operation accepted by `calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in the order advertised by the schema.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Wire name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operation; `None` on division by zero.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of `add`.
#[derive(Debug, Deserialize)]
pub struct AddArgs {
    pub a: f64,
    pub b: f64,
}

/// Arguments of `calculate`.
#[derive(Debug, Deserialize)]
pub struct CalculateArgs {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

/// Result text of `add`.
pub fn add(args: &AddArgs) -> ToolResult {
    ToolResult::text(format!(
        "The sum of {} + {} = {}",
        format_number(args.a),
        format_number(args.b),
        format_number(args.a + args.b)
    ))
}

/// Result of `calculate`; division by zero is an error result.
pub fn calculate(args: &CalculateArgs) -> ToolResult {
    match args.operation.apply(args.a, args.b) {
        Some(result) => ToolResult::text(format!(
            "Result: {} {} {} = {}",
            format_number(args.a),
            args.operation,
            format_number(args.b),
            format_number(result)
        )),
        None => ToolResult::error(DIVISION_BY_ZERO),
    }
}

fn add_schema() -> Result<InputSchema, DispatchError> {
    InputSchema::new(vec![
        ToolArgument::number("a", "First number"),
        ToolArgument::number("b", "Second number"),
    ])
    .map_err(|source| DispatchError::InvalidSchema {
        tool: "add".into(),
        source,
    })
}

fn calculate_schema() -> Result<InputSchema, DispatchError> {
    InputSchema::new(vec![
        ToolArgument::one_of(
            "operation",
            "The arithmetic operation to perform",
            Operation::ALL.iter().map(|op| op.as_str()),
        ),
        ToolArgument::number("a", "First operand"),
        ToolArgument::number("b", "Second operand"),
    ])
    .map_err(|source| DispatchError::InvalidSchema {
        tool: "calculate".into(),
        source,
    })
}

/// Registers `add` and `calculate`.
///
/// # Errors
///
/// Returns `DispatchError::DuplicateTool` if either name is taken.
pub fn register(tools: &mut ToolRegistry) -> Result<(), DispatchError> {
    tools.register(
        "add",
        "Add two numbers together",
        add_schema()?,
        typed(|args: AddArgs| async move { add(&args) }),
    )?;
    tools.register(
        "calculate",
        "Perform basic arithmetic operations",
        calculate_schema()?,
        typed(|args: CalculateArgs| async move { calculate(&args) }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_text() {
        let r = add(&AddArgs { a: 2.0, b: 3.5 });
        assert_eq!(r.joined_text(), "The sum of 2 + 3.5 = 5.5");
        assert!(!r.is_error());
    }

    #[test]
    fn calculate_each_operation() {
        let cases = [
            (Operation::Add, "Result: 6 add 3 = 9"),
            (Operation::Subtract, "Result: 6 subtract 3 = 3"),
            (Operation::Multiply, "Result: 6 multiply 3 = 18"),
            (Operation::Divide, "Result: 6 divide 3 = 2"),
        ];
        for (operation, expected) in cases {
            let r = calculate(&CalculateArgs {
                operation,
                a: 6.0,
                b: 3.0,
            });
            assert_eq!(r.joined_text(), expected);
            assert!(!r.is_error());
        }
    }

    #[test]
    fn divide_by_zero_is_error_result() {
        let r = calculate(&CalculateArgs {
            operation: Operation::Divide,
            a: 5.0,
            b: 0.0,
        });
        assert!(r.is_error());
        assert_eq!(r.joined_text(), DIVISION_BY_ZERO);
    }

    #[test]
    fn negative_zero_divisor_is_still_zero() {
        assert_eq!(Operation::Divide.apply(1.0, -0.0), None);
    }

    #[test]
    fn multiply_by_zero_is_fine() {
        assert_eq!(Operation::Multiply.apply(7.0, 0.0), Some(0.0));
    }

    #[test]
    fn schemas_build() {
        assert_eq!(add_schema().expect("add").arguments().len(), 2);
        let calc = calculate_schema().expect("calculate").to_json_schema();
        assert_eq!(
            calc["properties"]["operation"]["enum"],
            serde_json::json!(["add", "subtract", "multiply", "divide"])
        );
    }
}
