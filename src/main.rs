use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use minimax_chess::engines::engine_minimax::{MinimaxEngine, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH};
use minimax_chess::engines::engine_random::RandomEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::search::board_scoring::Evaluation;
use minimax_chess::uci::uci_top::run_stdio_loop_with;
use minimax_chess::utils::console_game::{ConsoleGame, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Uci,
    Console,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Human {
    White,
    Black,
    Both,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EvaluationArg {
    MaterialMobility,
    Material,
}

impl From<EvaluationArg> for Evaluation {
    fn from(arg: EvaluationArg) -> Self {
        match arg {
            EvaluationArg::MaterialMobility => Evaluation::MaterialMobility,
            EvaluationArg::Material => Evaluation::Material,
        }
    }
}

/// Chess rules engine with a minimax alpha-beta player.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Speak UCI on stdin/stdout, or play in the terminal.
    #[arg(long, value_enum, default_value_t = Mode::Uci)]
    mode: Mode,

    /// Search depth in plies.
    #[arg(
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_DEPTH)..=i64::from(MAX_DEPTH))
    )]
    depth: u8,

    /// Sides played from the keyboard in console mode.
    #[arg(long, value_enum, default_value_t = Human::White)]
    human: Human,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    engine: EngineKind,

    #[arg(long, value_enum, default_value_t = EvaluationArg::MaterialMobility)]
    evaluation: EvaluationArg,

    /// Seed for the random engine; omit for a fresh game every run.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn build_engine(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Minimax => Box::new(MinimaxEngine::new(self.depth, self.evaluation.into())),
            EngineKind::Random => match self.seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }

    fn player(&self, color_is_human: bool) -> Player {
        if color_is_human {
            Player::Human
        } else {
            Player::Engine(self.build_engine())
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the UCI stream on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting");

    match cli.mode {
        Mode::Uci => run_stdio_loop_with(cli.build_engine()).context("UCI session failed")?,
        Mode::Console => {
            let white = cli.player(matches!(cli.human, Human::White | Human::Both));
            let black = cli.player(matches!(cli.human, Human::Black | Human::Both));
            let mut game = ConsoleGame::new(white, black);

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let outcome = game
                .run(stdin.lock(), &mut stdout)
                .context("console game failed")?;
            info!(?outcome, "game over");
        }
    }

    Ok(())
}
