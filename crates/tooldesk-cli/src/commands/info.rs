//! `tooldesk info` command.

use clap::Args;

use tooldesk_config::DeskConfig;
use tooldesk_transport_http::router::{LEGACY_PREFIX, STREAMABLE_PREFIX};

use crate::{output, shared};

/// Show the server identity, listener and catalog.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the info command.
pub fn execute(args: &InfoArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let (tools, resources) = shared::builtin_catalog()?;
    let info = config.server.info();
    let tool_names: Vec<&str> = tools.definitions().iter().map(|d| d.name.as_str()).collect();
    let uris: Vec<&str> = resources.list().iter().map(|r| r.uri.as_str()).collect();

    if args.json {
        output::print_json(&serde_json::json!({
            "name": info.name,
            "version": info.version,
            "listen": format!("{}:{}", config.http.host, config.http.port),
            "transports": [LEGACY_PREFIX, STREAMABLE_PREFIX],
            "tools": tool_names,
            "resources": uris,
        }));
        return Ok(());
    }

    output::print_success(&format!("{} {}", info.name, info.version));
    println!("  listen:     {}:{}", config.http.host, config.http.port);
    println!("  transports: {LEGACY_PREFIX}, {STREAMABLE_PREFIX}");
    println!("  tools:      {}", tool_names.join(", "));
    println!("  resources:  {}", uris.join(", "));
    Ok(())
}
