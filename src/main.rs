//! Connect Four from the terminal.
//!
//! ## Usage
//!
//! - `connect-four` - Human (Red) against the Monte Carlo bot (Green)
//! - `connect-four play --red monte --green random` - Pick any two players
//! - `connect-four demo` - Watch the Monte Carlo bot play a random bot

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use connect_four::board::Color;
use connect_four::config::GameConfig;
use connect_four::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, N_SIMS};
use connect_four::game::Status;
use connect_four::monte_carlo::MonteCarloBot;
use connect_four::play::Match;
use connect_four::player::{HumanPlayer, Player, RandomBot};

/// Connect Four with a Monte Carlo bot
#[derive(Parser)]
#[command(name = "connect-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between any two players
    Play(PlayArgs),
    /// Watch the Monte Carlo bot play a random bot
    Demo(GameArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Monte,
}

#[derive(Args)]
struct PlayArgs {
    /// Player moving first
    #[arg(long, value_enum, default_value = "human")]
    red: PlayerKind,

    /// Player moving second
    #[arg(long, value_enum, default_value = "monte")]
    green: PlayerKind,

    #[command(flatten)]
    game: GameArgs,
}

#[derive(Args)]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Pieces in a row needed to win
    #[arg(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Rollouts per Monte Carlo decision
    #[arg(long, default_value_t = N_SIMS)]
    simulations: usize,

    /// Run Monte Carlo rollouts on all cores
    #[arg(long)]
    parallel: bool,

    /// Seed for reproducible bots
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            columns: self.columns,
            win_length: self.win_length,
            simulations: self.simulations,
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn make_player(kind: PlayerKind, color: Color, config: &GameConfig) -> Box<dyn Player> {
    // Distinct seed per seat.
    let seed = config.seed.map(|s| s.wrapping_add(color as u64));
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(color.name())),
        PlayerKind::Random => Box::new(match seed {
            Some(seed) => RandomBot::with_seed(seed),
            None => RandomBot::new(),
        }),
        PlayerKind::Monte => Box::new(match seed {
            Some(seed) => MonteCarloBot::with_seed(config.search_config(), seed),
            None => MonteCarloBot::new(config.search_config()),
        }),
    }
}

fn play(red: PlayerKind, green: PlayerKind, config: GameConfig) -> Result<()> {
    let state = config.new_game()?;
    info!(?config, "starting game");

    let mut game = Match::new(
        make_player(red, Color::Red, &config),
        make_player(green, Color::Green, &config),
        state,
    );

    println!("{}\n", game.state().board());
    let status = game.run_with(|state| println!("{}\n", state.board()))?;

    println!("{}", result_line(&game, status));
    Ok(())
}

fn result_line(game: &Match, status: Status) -> String {
    match status {
        Status::Won(color) => format!("*** {} ({color}) won! ***", game.player_name(color)),
        Status::Drawn => "*** Game finished in a draw ***".to_string(),
        Status::Active => "*** Game stopped without a result ***".to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Commands::Play(args)) => play(args.red, args.green, args.game.config()),
        Some(Commands::Demo(args)) => play(PlayerKind::Monte, PlayerKind::Random, args.config()),
        None => play(PlayerKind::Human, PlayerKind::Monte, GameConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::game::GameState;
    use connect_four::monte_carlo::SearchConfig;

    fn game() -> Match {
        Match::new(
            Box::new(RandomBot::with_seed(1)),
            Box::new(MonteCarloBot::with_seed(SearchConfig::default(), 2)),
            GameState::new(),
        )
    }

    #[test]
    fn test_result_line() {
        let game = game();
        assert_eq!(
            result_line(&game, Status::Won(Color::Green)),
            "*** Monte Carlo (Green) won! ***"
        );
        assert_eq!(
            result_line(&game, Status::Drawn),
            "*** Game finished in a draw ***"
        );
    }

    #[test]
    fn test_result_line_unfinished_game() {
        assert_eq!(
            result_line(&game(), Status::Active),
            "*** Game stopped without a result ***"
        );
    }
}
