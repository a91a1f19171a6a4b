//! tooldesk CLI - remote tool-calling server.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use tooldesk_config::{load_config, LogFormat};

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// tooldesk - serve a small set of tools over HTTP, or call them locally.
#[derive(Debug, Parser)]
#[command(name = "tooldesk", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format (overrides `logging.format`).
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Plain,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(f: LogFormatArg) -> Self {
        match f {
            LogFormatArg::Plain => LogFormat::Plain,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(commands::serve::ServeArgs),
    /// List the registered tools.
    Tools(commands::tools::ToolsArgs),
    /// Call a tool locally.
    Call(commands::call::CallArgs),
    /// Read a resource by URI.
    Read(commands::read::ReadArgs),
    /// Show server identity and catalog.
    Info(commands::info::InfoArgs),
}

/// Picks the log filter: `-v` flags win, then `RUST_LOG`, then config.
fn log_filter(verbose: u8, configured: &str) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(filter: EnvFilter, format: LogFormat) {
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        LogFormat::Plain => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let format = cli.log_format.map_or(config.logging.format, LogFormat::from);
    init_tracing(log_filter(cli.verbose, &config.logging.level), format);

    tracing::debug!(config = ?cli.config, "tooldesk starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Tools(args) => commands::tools::execute(args),
        Commands::Call(args) => commands::call::execute(args).await,
        Commands::Read(args) => commands::read::execute(args),
        Commands::Info(args) => commands::info::execute(args, &config),
    }
}
