//! Argument payload resolution for `tooldesk call`.
//!
//! Sources, in priority order:
//! - a JSON file via `--args-file` / `-f` (`-` reads stdin)
//! - an inline JSON string via `--args` / `-a`

use std::io::Read;
use std::path::Path;

use serde_json::Value;

/// Resolves the tool arguments from CLI flags.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the text is not JSON.
pub fn resolve_args(inline: &str, args_file: Option<&str>) -> anyhow::Result<Value> {
    let text = match args_file {
        Some("-") => read_from_stdin()?,
        Some(path) => read_from_file(path)?,
        None => inline.to_string(),
    };
    serde_json::from_str(text.trim()).map_err(|e| anyhow::anyhow!("invalid JSON arguments: {e}"))
}

fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("arguments file not found: {path}");
    }
    std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read arguments file: {e}"))
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer)
}
