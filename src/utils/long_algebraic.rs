//! UCI long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Promotion is always to a Queen, so a trailing promotion letter is accepted
//! on input and ignored, and `q` is appended on output whenever a pawn reaches
//! its last rank.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::{ChessMove, GameState, PieceKind};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, NotationError> {
    let invalid = || NotationError::Move(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() {
        return Err(invalid());
    }
    match long_algebraic.len() {
        4 => {}
        5 => {
            let promotion = long_algebraic.as_bytes()[4] as char;
            if !matches!(promotion.to_ascii_lowercase(), 'q' | 'r' | 'b' | 'n') {
                return Err(invalid());
            }
        }
        _ => return Err(invalid()),
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    Ok(ChessMove::new(from, to))
}

/// Format `mv` as played from `game_state`; the position decides whether the
/// move is a promotion.
pub fn move_to_long_algebraic(mv: ChessMove, game_state: &GameState) -> Result<String, NotationError> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(piece) = game_state.board.piece_at(mv.from) {
        if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row() {
            out.push('q');
        }
    }

    Ok(out)
}
