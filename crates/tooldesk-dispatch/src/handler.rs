//! Tool handler trait and the typed closure adapter.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use tooldesk_types::ToolResult;

use crate::error::ValidationError;

/// Executes one tool.
///
/// `args` has already passed the tool's input schema. Domain failures are
/// returned as `ToolResult::error`; the `Err` arm is reserved for arguments
/// the handler cannot decode.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Runs the tool.
    async fn call(&self, args: Map<String, Value>) -> Result<ToolResult, ValidationError>;
}

/// Adapts an async closure over a typed argument struct into a
/// [`ToolHandler`].
pub struct TypedHandler<A, F> {
    f: F,
    _args: PhantomData<fn(A)>,
}

/// Wraps `f` so that validated arguments are decoded into `A` before the
/// call.
///
/// ```ignore
/// registry.register("add", "Add two numbers", schema, typed(|args: AddArgs| async move {
///     ToolResult::text(format!("{}", args.a + args.b))
/// }))?;
/// ```
pub fn typed<A, F, Fut>(f: F) -> TypedHandler<A, F>
where
    A: DeserializeOwned + Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ToolResult> + Send + 'static,
{
    TypedHandler {
        f,
        _args: PhantomData,
    }
}

#[async_trait]
impl<A, F, Fut> ToolHandler for TypedHandler<A, F>
where
    A: DeserializeOwned + Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ToolResult> + Send + 'static,
{
    async fn call(&self, args: Map<String, Value>) -> Result<ToolResult, ValidationError> {
        let decoded: A = serde_json::from_value(Value::Object(args))?;
        Ok((self.f)(decoded).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Greeting {
        name: String,
    }

    fn args(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[tokio::test]
    async fn typed_handler_decodes_arguments() {
        let h = typed(|g: Greeting| async move { ToolResult::text(format!("hi {}", g.name)) });
        let out = h.call(args(json!({"name": "ada"}))).await.expect("call");
        assert_eq!(out.joined_text(), "hi ada");
    }

    #[tokio::test]
    async fn typed_handler_reports_decode_failure() {
        let h = typed(|g: Greeting| async move { ToolResult::text(g.name) });
        let err = h.call(args(json!({"name": 7}))).await.expect_err("decode");
        assert_eq!(err.field_names(), vec!["$"]);
    }
}
