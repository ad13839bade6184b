//! Interactive text-mode game loop.
//!
//! Either side may be a human typing console coordinates (`P10 30`, `10 30`)
//! or an [`Engine`]. Input and output are generic so the loop can be scripted.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_apply::{apply_chess_move, apply_notation};
use crate::move_generation::legal_move_generator::{game_status, GameStatus};
use crate::utils::render_game_state::render_game_state;

pub enum Player {
    Human,
    Engine(Box<dyn Engine>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// A human typed `quit` or `exit`, or input ran out.
    Quit,
    /// An engine produced no move in a position that is not terminal.
    NoMove(Color),
}

pub struct ConsoleGame {
    game_state: GameState,
    white: Player,
    black: Player,
}

impl ConsoleGame {
    pub fn new(white: Player, black: Player) -> Self {
        Self::from_position(GameState::new_game(), white, black)
    }

    pub fn from_position(game_state: GameState, white: Player, black: Player) -> Self {
        Self {
            game_state,
            white,
            black,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> io::Result<GameOutcome> {
        loop {
            let turn = self.game_state.side_to_move;
            let player = match turn {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };

            writeln!(out)?;
            match player {
                Player::Human => writeln!(
                    out,
                    "{turn} to move. Enter (e.g.) P10 30 or 10 30. Type 'quit' to exit."
                )?,
                Player::Engine(_) => writeln!(out, "{turn} to move.")?,
            }
            writeln!(out, "{}", render_game_state(&self.game_state))?;

            let accepted = match player {
                Player::Engine(engine) => {
                    let output = engine.choose_move(&self.game_state, &GoParams::default());
                    let Some(mv) = output.best_move else {
                        writeln!(out, "{turn} has no move.")?;
                        return Ok(GameOutcome::NoMove(turn));
                    };
                    debug!(engine = engine.name(), %mv, "engine move");
                    writeln!(out, "> {mv}")?;
                    apply_chess_move(&mut self.game_state, mv)
                }
                Player::Human => {
                    write!(out, "> ")?;
                    out.flush()?;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        return Ok(GameOutcome::Quit);
                    }
                    let line = line.trim();
                    if line == "quit" || line == "exit" {
                        info!("game abandoned by {turn}");
                        return Ok(GameOutcome::Quit);
                    }
                    if line.is_empty() {
                        continue;
                    }
                    apply_notation(&mut self.game_state, line)
                }
            };

            if let Err(err) = accepted {
                writeln!(out, "Invalid: {err}")?;
                continue;
            }

            let to_move = self.game_state.side_to_move;
            match game_status(&self.game_state) {
                GameStatus::Checkmate { winner } => {
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                    writeln!(out, "Checkmate! {winner} wins.")?;
                    return Ok(GameOutcome::Checkmate { winner });
                }
                GameStatus::Stalemate => {
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                    writeln!(out, "Stalemate! Draw.")?;
                    return Ok(GameOutcome::Stalemate);
                }
                GameStatus::Check => writeln!(out, "Check on {to_move}!")?,
                GameStatus::Ongoing => {}
            }
        }
    }
}
