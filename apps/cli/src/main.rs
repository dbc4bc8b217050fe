//! PDM CLI - command-line front end for the predictive maintenance console
//!
//! Provides a `pdm` command that validates telemetry request documents and
//! submits them to the orchestration API (`POST /orchestrate`).

mod commands;
mod config;

use clap::{Parser, Subcommand};
use pdm_client::PdmConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{example, health, show_config, submit, validate};

/// PDM CLI - predictive maintenance orchestration console
///
/// Edits and submits telemetry readings to the orchestration API, then shows
/// the predicted risk, the service booking, the root cause summary and the
/// customer voice script.
#[derive(Parser, Debug)]
#[command(
    name = "pdm",
    author,
    version,
    about = "Predictive maintenance orchestration console",
    long_about = "pdm submits telemetry request documents to the orchestration API and renders\nthe risk prediction, booking, root cause analysis and voice script it returns."
)]
struct Args {
    /// Orchestration API base URL (overrides PDM_API_BASE and config files)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a request document to /orchestrate
    ///
    /// Reads FILE, or stdin when FILE is `-`, or the example document when
    /// FILE is omitted. The text is sent exactly as read.
    Submit {
        /// Request document path, or `-` for stdin
        file: Option<PathBuf>,
    },

    /// Check a request document without sending it
    ///
    /// Reports JSON syntax errors and advisory schema issues.
    Validate {
        /// Request document path, or `-` for stdin
        file: Option<PathBuf>,
    },

    /// Print the example request document
    Example,

    /// Probe the API health endpoint
    Health,

    /// Show the resolved configuration
    Config,
}

impl Command {
    /// `example` and `validate` work offline and never read the config files.
    fn uses_config(&self) -> bool {
        !matches!(self, Self::Example | Self::Validate { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file_config = if args.command.uses_config() { config::load_config()? } else { PdmConfig::default() };

    // Initialize tracing
    let level = parse_level(args.log_level.as_deref().or(file_config.log_level.as_deref()));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let json_output = args.json || file_config.output.is_json();

    match args.command {
        Command::Example => {
            example::execute();
            Ok(())
        }
        Command::Validate { file } => validate::execute(file.as_deref(), json_output),
        Command::Submit { file } => {
            let client = config::build_client(args.api_base.as_deref(), &file_config)?;
            submit::execute(&client, file.as_deref(), json_output).await
        }
        Command::Health => {
            let client = config::build_client(args.api_base.as_deref(), &file_config)?;
            health::execute(&client, json_output).await
        }
        Command::Config => {
            let resolved = config::resolve(args.api_base.as_deref(), &file_config)?;
            show_config::execute(&resolved, &file_config, level, json_output)
        }
    }
}

fn parse_level(level: Option<&str>) -> Level {
    match level.map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    }
}
