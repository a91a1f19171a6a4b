//! The boundary between the router and the protocol implementations.

use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;

/// Serves requests routed to one transport mount point.
///
/// The request reaches the transport unmodified, path prefix included.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Handles one request.
    async fn serve(&self, request: Request) -> Response;
}
