//! Engine abstraction layer used by the UCI and console drivers.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::chess_errors::EngineError;
use crate::game_state::chess_types::{ChessMove, GameState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one search.
    pub depth: Option<u8>,
    /// Accepted for protocol compatibility; searches are depth-bounded only.
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// `option name ...` lines advertised in reply to `uci`.
    fn uci_options(&self) -> Vec<String> {
        Vec::new()
    }

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    /// `best_move` is `None` only when the side to move has no legal move.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput;
}
