//! PDM TUI - two-panel orchestration console
//!
//! Edit the telemetry request on the left, submit it with Ctrl+S and read the
//! risk, booking, root cause and voice script on the right.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pdm_client::{ClientConfig, OrchestrationClient, PdmConfig};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdm_tui::app::App;
use pdm_tui::components::Spinner;
use pdm_tui::theme::PdmTheme;
use pdm_tui::views;

#[derive(Parser, Debug)]
#[command(name = "pdm-tui", version, about = "Predictive maintenance orchestration console")]
struct Args {
    /// Orchestration API base URL (overrides PDM_API_BASE and config files)
    #[arg(long)]
    api_base: Option<String>,

    /// Use the 16-color ANSI palette
    #[arg(long)]
    ansi: bool,

    /// Show a still spinner instead of an animated one
    #[arg(long)]
    no_animation: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr only when asked for; anything else would corrupt the screen.
    let log_enabled = std::env::var("RUST_LOG_TUI").is_ok();
    if log_enabled {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG_TUI")
                    .unwrap_or_else(|_| "pdm_tui=debug,pdm_client=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new("off"))
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init();
    }

    let file_config = PdmConfig::discover_and_load().context("Failed to load configuration")?;
    let config = ClientConfig::resolve(args.api_base.as_deref(), &file_config, |key| std::env::var(key).ok())
        .context("Failed to resolve API base URL")?;

    let mut app = App::new(OrchestrationClient::new(config));
    if args.ansi {
        app = app.with_theme(PdmTheme::ansi());
    }
    if args.no_animation {
        app = app.with_spinner(Spinner::new().still());
    }

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| views::render(frame, app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
