//! Path router for the HTTP front door.
//! Routes: `/` (server identity), `/sse` and `/sse/*` (legacy transport),
//! `/mcp` and `/mcp/*` (streamable transport), 404 for everything else.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::json;

use tooldesk_types::ServerInfo;

use crate::transport::Transport;

/// Mount point of the legacy transport.
pub const LEGACY_PREFIX: &str = "/sse";
/// Mount point of the streamable transport.
pub const STREAMABLE_PREFIX: &str = "/mcp";

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Identity reported on `/`.
    pub info: ServerInfo,
    /// Serves `/sse` and everything below it.
    pub legacy: Arc<dyn Transport>,
    /// Serves `/mcp` and everything below it.
    pub streamable: Arc<dyn Transport>,
}

/// Builds the axum `Router`.
///
/// Transport paths are matched by hand in the fallback so that `/sse`,
/// `/sse/` and `/sse/anything` all reach the transport while `/ssefoo`
/// does not.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle_root))
        .fallback(handle_transport)
        .with_state(state)
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.info.name,
        "version": state.info.version,
        "transports": [LEGACY_PREFIX, STREAMABLE_PREFIX],
    }))
}

async fn handle_transport(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path();
    let transport = if is_mounted(path, LEGACY_PREFIX) {
        &state.legacy
    } else if is_mounted(path, STREAMABLE_PREFIX) {
        &state.streamable
    } else {
        tracing::debug!(path, "no route");
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    transport.serve(request).await
}

/// `path` is `prefix` itself or lies below `prefix/`.
fn is_mounted(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
