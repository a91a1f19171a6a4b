//! `tooldesk read` command.

use clap::Args;

use crate::shared;

/// Read a resource by URI.
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Resource URI (e.g. `about://server`).
    pub uri: String,
}

/// Executes the read command.
pub fn execute(args: &ReadArgs) -> anyhow::Result<()> {
    let (_, resources) = shared::builtin_catalog()?;
    let contents = resources.read(&args.uri)?;
    println!("{}", contents.text);
    Ok(())
}
