//! HTTP server that binds the router to a TCP socket.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use tooldesk_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::jsonrpc::JsonRpcTransport;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server.
pub struct HttpServer {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a server around explicit router state.
    pub fn new(host: impl Into<String>, port: u16, state: AppState) -> Self {
        Self {
            host: host.into(),
            port,
            state,
        }
    }

    /// Creates a server whose `/sse` and `/mcp` mounts both use the
    /// JSON-RPC bridge over `handler`.
    pub fn with_handler(
        handler: Arc<McpHandler>,
        host: impl Into<String>,
        port: u16,
        max_body_bytes: usize,
    ) -> Self {
        let bridge = Arc::new(JsonRpcTransport::with_body_limit(
            handler.clone(),
            max_body_bytes,
        ));
        let state = AppState {
            info: handler.info().clone(),
            legacy: bridge.clone(),
            streamable: bridge,
        };
        Self::new(host, port, state)
    }

    /// Serves until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|source| HttpTransportError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local = listener
            .local_addr()
            .map_or(addr, |a| a.to_string());

        tracing::info!(addr = %local, name = %self.state.info.name, "tooldesk HTTP server ready");

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(HttpTransportError::Serve)?;

        tracing::info!("tooldesk HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
}
