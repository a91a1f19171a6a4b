//! `tooldesk tools` command.

use clap::Args;

use crate::{output, shared};

/// List the registered tools.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print each tool with its JSON input schema.
    #[arg(long)]
    pub json: bool,
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs) -> anyhow::Result<()> {
    let (tools, _) = shared::builtin_catalog()?;

    if args.json {
        let listing: Vec<serde_json::Value> = tools
            .definitions()
            .iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "description": d.description,
                    "inputSchema": d.input_schema.to_json_schema(),
                })
            })
            .collect();
        output::print_json(&serde_json::Value::Array(listing));
        return Ok(());
    }

    let width = tools
        .definitions()
        .iter()
        .map(|d| d.name.as_str().len())
        .max()
        .unwrap_or(0);
    for d in tools.definitions() {
        println!("{:<width$}  {}", d.name.as_str(), d.description);
        for arg in d.input_schema.arguments() {
            let choices = arg
                .allowed_values
                .as_ref()
                .map(|v| format!(" [{}]", v.join("|")))
                .unwrap_or_default();
            println!(
                "{:<width$}    {} ({}{}){}",
                "",
                arg.name,
                arg.arg_type,
                if arg.required { "" } else { ", optional" },
                choices
            );
        }
    }
    Ok(())
}
