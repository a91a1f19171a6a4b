//! `tooldesk serve` command.
//!
//! Starts the HTTP server with `/sse` and `/mcp` both served by the
//! JSON-RPC bridge.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use tooldesk_config::DeskConfig;
use tooldesk_transport_http::HttpServer;

use crate::shared;

/// Start the HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `http.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port (overrides `http.port`).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let handler = Arc::new(shared::build_handler(config.server.info())?);
    let host = args.host.clone().unwrap_or_else(|| config.http.host.clone());
    let port = args.port.unwrap_or(config.http.port);

    let server = HttpServer::with_handler(handler, host, port, config.http.max_body_bytes);
    server.run().await.context("serving HTTP")
}
