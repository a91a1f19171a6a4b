//! `tooldesk call` command.
//!
//! Invokes a built-in tool in-process, without HTTP.

use clap::Args;

use crate::{input, shared};

/// Call a tool locally.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name (e.g. `add`, `calculate`).
    pub tool: String,
    /// JSON object with the tool arguments.
    #[arg(short, long, default_value = "{}")]
    pub args: String,
    /// Read the arguments from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub args_file: Option<String>,
}

/// Executes the call command.
///
/// A tool that reports an error result makes the command fail.
pub async fn execute(args: &CallArgs) -> anyhow::Result<()> {
    let payload = input::resolve_args(&args.args, args.args_file.as_deref())?;
    let (tools, _) = shared::builtin_catalog()?;

    tracing::debug!(tool = %args.tool, "calling tool");
    let result = tools.invoke(&args.tool, payload).await?;
    let text = result.joined_text();

    if result.is_error() {
        anyhow::bail!("{text}");
    }
    println!("{text}");
    Ok(())
}
