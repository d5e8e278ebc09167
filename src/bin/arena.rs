//! Headless matches between the minimax agent and another agent.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use minimax_connect_four::ai::{Agent, GreedyAgent, MinimaxAgent, OpponentKind, RandomAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{GameOutcome, GameState, Player};
use minimax_connect_four::logging::initialize_logging;

/// Pit the minimax agent against another agent.
#[derive(Parser)]
#[command(name = "arena", about = "Play minimax against another Connect Four agent")]
struct Cli {
    /// Number of games; minimax opens every other one
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Agent playing the human's side
    #[arg(long, value_enum, default_value = "random")]
    opponent: OpponentKind,

    /// Override the minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    losses: usize,
    draws: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level, None).context("initializing logging")?;

    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("validating configuration")?;

    let mut minimax = MinimaxAgent::new(config.search.depth);
    let mut opponent: Box<dyn Agent> = match (cli.opponent, cli.seed) {
        (OpponentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
        (OpponentKind::Random, None) => Box::new(RandomAgent::new()),
        (OpponentKind::Greedy, _) => Box::new(GreedyAgent::new()),
        // The search always maximizes for the computer's pieces.
        (OpponentKind::Minimax, _) => {
            bail!("minimax only plays the computer side; pick greedy or random")
        }
    };

    info!(
        games = cli.games,
        depth = config.search.depth,
        opponent = opponent.name(),
        "starting arena"
    );

    let mut tally = Tally::default();
    for game in 0..cli.games {
        let first = if game % 2 == 0 {
            Player::Computer
        } else {
            Player::Human
        };
        let (outcome, final_state) = play_game(&mut minimax, opponent.as_mut(), first)?;
        match outcome {
            GameOutcome::Winner(Player::Computer) => tally.wins += 1,
            GameOutcome::Winner(Player::Human) => tally.losses += 1,
            GameOutcome::Draw => tally.draws += 1,
        }
        info!(game = game + 1, first = first.name(), ?outcome, "game finished");
        debug!("final position:\n{}", final_state.board());
    }

    let total = cli.games as f64;
    println!("-------------------------------------------");
    println!(
        "Minimax (depth {}) vs {}: {} games",
        config.search.depth,
        opponent.name(),
        cli.games
    );
    println!(
        "Wins: {}  Losses: {}  Draws: {}  Win rate: {:.1}%",
        tally.wins,
        tally.losses,
        tally.draws,
        tally.wins as f64 / total * 100.0
    );
    Ok(())
}

fn play_game(
    minimax: &mut MinimaxAgent,
    opponent: &mut dyn Agent,
    first: Player,
) -> Result<(GameOutcome, GameState)> {
    let mut state = GameState::initial(first);
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok((outcome, state));
        }
        let mover = state.current_player();
        let action = match mover {
            Player::Computer => minimax.select_action(&state),
            Player::Human => opponent.select_action(&state),
        }
        .context("agent returned no move in a running game")?;
        state
            .apply_move_mut(action)
            .with_context(|| format!("{} played column {action}", mover.name()))?;
    }
}
