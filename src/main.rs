use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use minimax_connect_four::ai::OpponentKind;
use minimax_connect_four::config::{AppConfig, FirstPlayer};
use minimax_connect_four::logging::initialize_logging;
use minimax_connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "minimax-connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override who moves first
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Override the computer opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "off")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level, cli.log_file.as_deref()).context("initializing logging")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent;
    }
    config.validate().context("validating configuration")?;
    info!(?config, "starting game");

    run(config).context("running terminal UI")
}

fn run(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal; always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
