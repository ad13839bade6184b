//! Fixed-depth minimax engine.
//!
//! Wraps `minimax_search` with a configurable default depth and evaluation,
//! both exposed as UCI options.

use tracing::debug;

use crate::chess_errors::EngineError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::{Evaluation, MATE_SCORE};
use crate::search::minimax::{minimax_search, SearchConfig};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;
pub const DEFAULT_DEPTH: u8 = 3;

pub struct MinimaxEngine {
    default_depth: u8,
    evaluation: Evaluation,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8, evaluation: Evaluation) -> Self {
        Self {
            default_depth: default_depth.clamp(MIN_DEPTH, MAX_DEPTH),
            evaluation,
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, Evaluation::default())
    }
}

/// UCI score for the side to move: `cp` for ordinary scores, `mate` with a
/// signed move count once a forced mate is in sight.
fn uci_score(white_score: i32, side_sign: i32) -> String {
    let score = white_score * side_sign;
    let mate_ply = MATE_SCORE - score.abs();
    if (0..=i32::from(u8::MAX)).contains(&mate_ply) {
        let moves = (mate_ply + 1) / 2;
        format!("mate {}", if score > 0 { moves } else { -moves })
    } else {
        format!("cp {score}")
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn uci_options(&self) -> Vec<String> {
        vec![
            format!(
                "option name Depth type spin default {} min {} max {}",
                DEFAULT_DEPTH, MIN_DEPTH, MAX_DEPTH
            ),
            format!(
                "option name Evaluation type combo default {} var {} var {}",
                Evaluation::MaterialMobility,
                Evaluation::MaterialMobility,
                Evaluation::Material
            ),
        ]
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value.trim().parse::<u8>().map_err(|_| invalid())?;
            if !(MIN_DEPTH..=MAX_DEPTH).contains(&parsed) {
                return Err(invalid());
            }
            self.default_depth = parsed;
        } else if name.eq_ignore_ascii_case("Evaluation") {
            self.evaluation = value.trim().parse().map_err(|_| invalid())?;
        } else {
            return Err(EngineError::UnknownOption(name.to_owned()));
        }

        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput {
        // The search cannot be stopped, so `go depth` obeys the option bounds.
        let depth = params
            .depth
            .unwrap_or(self.default_depth)
            .clamp(MIN_DEPTH, MAX_DEPTH);

        let result = minimax_search(
            game_state,
            &self.evaluation,
            SearchConfig { max_depth: depth },
        );
        debug!(
            depth,
            evaluation = %self.evaluation,
            best_score = result.best_score,
            "minimax engine chose move"
        );

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            depth,
            uci_score(result.best_score, game_state.side_to_move.sign()),
            result.nodes
        ));
        if let Some(movetime) = params.movetime_ms {
            out.info_lines.push(format!(
                "info string minimax_engine ignoring movetime {movetime}"
            ));
        }

        out
    }
}
