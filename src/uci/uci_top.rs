//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains current position state, routes `go` requests
//! to the selected engine implementation, and emits protocol-compliant output.
//! Command failures are reported as `info string` lines and never end the
//! session.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::chess_errors::UciError;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::apply_chess_move;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

const UCI_ENGINE_NAME: &str = "Minimax Chess";
const UCI_ENGINE_AUTHOR: &str = "the minimax_chess authors";

/// Run a UCI session on stdin/stdout with the default minimax engine.
pub fn run_stdio_loop() -> io::Result<()> {
    run_stdio_loop_with(Box::new(MinimaxEngine::default()))
}

pub fn run_stdio_loop_with(engine: Box<dyn Engine>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(UciState::with_engine(engine), stdin.lock(), &mut stdout)
}

/// Drive `uci` from `input` until `quit` or end of input.
pub fn run_loop(mut uci: UciState, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    debug_mode: bool,
}

impl Default for UciState {
    fn default() -> Self {
        Self::new()
    }
}

impl UciState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(MinimaxEngine::default()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine,
            debug_mode: false,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Returns `Ok(true)` once `quit` has been received.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!(command = trimmed, "uci command");

        match cmd {
            "uci" => {
                writeln!(out, "id name {} ({})", UCI_ENGINE_NAME, self.engine.name())?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                for option in self.engine.uci_options() {
                    writeln!(out, "{}", option)?;
                }
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    warn!(%err, "setoption rejected");
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    warn!(%err, "position rejected");
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                self.handle_go(trimmed, out)?;
            }
            "stop" => {
                // Search is synchronous; by the time `stop` is read it has finished.
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored for UCI compatibility.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), UciError> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        if name_tokens.is_empty() {
            return Err(UciError::Incomplete("option name"));
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");
        self.engine.set_option(&name, &value)?;
        Ok(())
    }

    /// Builds the new position aside and only installs it once every listed
    /// move has been applied, so a bad command leaves the old position.
    fn handle_position(&mut self, line: &str) -> Result<(), UciError> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut base_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                if fen_parts.is_empty() {
                    return Err(UciError::Incomplete("FEN after 'position fen'"));
                }
                GameState::from_fen(&fen_parts.join(" "))?
            }
            Some(other) => return Err(UciError::UnsupportedToken(other.to_owned())),
            None => return Err(UciError::Incomplete("position source")),
        };

        match tokens.next() {
            None => {}
            Some("moves") => {
                for lan in tokens {
                    let mv = long_algebraic_to_move(lan)?;
                    apply_chess_move(&mut base_state, mv).map_err(|source| {
                        UciError::IllegalMove {
                            text: lan.to_owned(),
                            source,
                        }
                    })?;
                }
            }
            Some(other) => return Err(UciError::UnsupportedToken(other.to_owned())),
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let params = parse_go_params(line);
        let result = self.engine.choose_move(&self.game_state, &params);

        for info in &result.info_lines {
            writeln!(out, "{}", info)?;
        }
        if self.debug_mode {
            writeln!(out, "info string fen {}", self.game_state.get_fen())?;
        }

        let lan = result
            .best_move
            .and_then(|mv| move_to_long_algebraic(mv, &self.game_state).ok());
        match lan {
            Some(lan) => writeln!(out, "bestmove {}", lan)?,
            None => writeln!(out, "bestmove 0000")?,
        }

        Ok(())
    }
}

/// Unparseable values leave the field unset, as do unsupported keywords.
fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace().skip(1);

    while let Some(tok) = tokens.next() {
        match tok {
            "depth" => {
                params.depth = tokens.next().and_then(|x| x.parse::<u8>().ok());
            }
            "movetime" => {
                params.movetime_ms = tokens.next().and_then(|x| x.parse::<u64>().ok());
            }
            _ => {}
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::{parse_go_params, run_loop, UciState};
    use crate::chess_errors::UciError;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::Color;
    use crate::search::board_scoring::Evaluation;

    fn run_script(state: UciState, script: &str) -> String {
        let mut out = Vec::<u8>::new();
        run_loop(state, script.as_bytes(), &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("UCI output is ASCII")
    }

    #[test]
    fn position_startpos_with_moves_updates_state() {
        let mut state = UciState::new();
        state
            .handle_position("position startpos moves e2e4 e7e5 g1f3")
            .expect("position command should parse");

        assert_eq!(state.game_state().side_to_move, Color::Black);
        assert_eq!(
            state.game_state().get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 2"
        );
    }

    #[test]
    fn position_fen_without_moves_updates_state() {
        let mut state = UciState::new();
        state
            .handle_position("position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")
            .expect("position fen should parse");

        assert_eq!(state.game_state().get_fen(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    }

    #[test]
    fn illegal_move_list_keeps_previous_position() {
        let mut state = UciState::new();
        state
            .handle_position("position startpos moves e2e4")
            .expect("position command should parse");
        let before = *state.game_state();

        let err = state
            .handle_position("position startpos moves d2d4 d2d4")
            .expect_err("second d2d4 has no pawn to move");
        assert!(matches!(err, UciError::IllegalMove { ref text, .. } if text == "d2d4"));
        assert_eq!(*state.game_state(), before);

        assert!(matches!(
            state.handle_position("position startpos moves e2e9"),
            Err(UciError::Notation(_))
        ));
        assert!(matches!(
            state.handle_position("position fen"),
            Err(UciError::Incomplete(_))
        ));
        assert!(matches!(
            state.handle_position("position somewhere"),
            Err(UciError::UnsupportedToken(_))
        ));
        assert_eq!(*state.game_state(), before);
    }

    #[test]
    fn stray_token_after_position_source_is_rejected() {
        let mut state = UciState::new();
        state
            .handle_position("position startpos moves e2e4")
            .expect("position command should parse");
        let before = *state.game_state();

        assert!(matches!(
            state.handle_position("position startpos junk e7e5"),
            Err(UciError::UnsupportedToken(ref tok)) if tok == "junk"
        ));
        assert!(matches!(
            state.handle_position("position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1 extra"),
            Err(UciError::Fen(_))
        ));
        assert_eq!(*state.game_state(), before);
    }

    #[test]
    fn setoption_reaches_the_engine() {
        let mut state = UciState::new();
        state
            .handle_setoption("setoption name Depth value 2")
            .expect("depth should be accepted");
        state
            .handle_setoption("setoption name Evaluation value Material")
            .expect("evaluation should be accepted");
        assert!(matches!(
            state.handle_setoption("setoption name Depth value 99"),
            Err(UciError::Engine(_))
        ));
        assert!(matches!(
            state.handle_setoption("setoption value 3"),
            Err(UciError::Incomplete(_))
        ));
    }

    #[test]
    fn parse_go_params_reads_depth_and_movetime() {
        let params = parse_go_params("go wtime 120000 depth 4 movetime 500");
        assert_eq!(params.depth, Some(4));
        assert_eq!(params.movetime_ms, Some(500));

        let params = parse_go_params("go depth x");
        assert_eq!(params.depth, None);
    }

    #[test]
    fn handshake_and_search_script() {
        let output = run_script(
            UciState::with_engine(Box::new(MinimaxEngine::new(1, Evaluation::Material))),
            "uci\nisready\nposition fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1\ngo depth 2\nstop\nquit\nisready\n",
        );
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("id name Minimax Chess"));
        assert!(lines.contains(&"option name Depth type spin default 3 min 1 max 8"));
        assert!(lines.contains(&"uciok"));
        assert_eq!(lines.iter().filter(|line| **line == "readyok").count(), 1);
        assert_eq!(lines.last().copied(), Some("bestmove a1a8"));
    }

    #[test]
    fn terminal_position_reports_null_move() {
        let output = run_script(
            UciState::with_engine(Box::new(RandomEngine::with_seed(3))),
            "position fen 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1\ngo\n",
        );
        assert_eq!(output.lines().last(), Some("bestmove 0000"));
    }

    #[test]
    fn promotion_is_sent_with_queen_suffix() {
        let output = run_script(
            UciState::with_engine(Box::new(MinimaxEngine::new(1, Evaluation::Material))),
            "position fen 8/P7/8/8/8/8/8/k6K w - - 0 1\ngo depth 1\n",
        );
        assert_eq!(output.lines().last(), Some("bestmove a7a8q"));
    }

    #[test]
    fn incoming_promotion_suffix_is_accepted() {
        let mut state = UciState::new();
        state
            .handle_position("position fen 8/P7/8/8/8/8/8/k6K w - - 0 1 moves a7a8q")
            .expect("promotion move should apply");
        assert_eq!(state.game_state().get_fen(), "Q7/8/8/8/8/8/8/k6K b - - 0 1");
    }
}
