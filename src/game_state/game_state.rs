//! Game aggregate: board, side to move and the transient en-passant window.
//!
//! `GameState` is `Copy`. A copy is a full deep snapshot of the position, so
//! search and protocol layers can explore continuations on their own value
//! without touching the canonical game.

use crate::chess_errors::FenError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, Square};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Set right after a pawn's two-square advance and cleared by the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassantWindow {
    /// Square a capturing pawn lands on.
    pub target: Square,
    /// Square of the pawn that just advanced two squares.
    pub captured: Square,
    /// Color of the pawn that advanced.
    pub pawn_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant: Option<EnPassantWindow>,
    /// Starts at 1 and increments after each Black move.
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            en_passant: None,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, White to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_starting_position(&self) -> bool {
        self.get_fen() == STARTING_POSITION_FEN
    }
}

/// Entry point for drivers: the standard initial position.
#[inline]
pub fn create_initial_position() -> GameState {
    GameState::new_game()
}
